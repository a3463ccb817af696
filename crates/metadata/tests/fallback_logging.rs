//! The fallback warning reaches the user through `take_warning` only; the
//! provider's own log records stay below `warn` so they never show up under
//! the CLI's default filter.

use log::{Level, LevelFilter, Log, Metadata, Record};
use pretty_assertions::assert_eq;
use springboot_metadata::{FallbackCatalog, MetadataProvider, OfflineSource};
use std::sync::Mutex;

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("springboot_metadata") {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

#[tokio::test]
async fn offline_failure_is_surfaced_once() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let provider = MetadataProvider::new(Box::new(OfflineSource), FallbackCatalog::builtin());
    assert_eq!(
        provider.fetch_versions().await,
        FallbackCatalog::builtin().versions
    );
    provider.fetch_dependency_catalog().await;

    let records = CAPTURE.0.lock().unwrap().clone();
    let loud = records
        .iter()
        .filter(|(level, _)| *level <= Level::Warn)
        .count();
    assert_eq!(loud, 0, "unexpected warn/error records: {records:?}");
    assert_eq!(
        records
            .iter()
            .filter(|(_, message)| message.contains("Failed to fetch Spring metadata"))
            .count(),
        1
    );

    let warning = provider.take_warning().expect("fallback warning");
    assert!(warning.starts_with("Failed to fetch Spring metadata ("));
    assert_eq!(provider.take_warning(), None);
}
