//! Layered settings: built-in defaults, then an optional TOML file, then
//! environment variables, then `create` flags.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use springboot_metadata::MetadataConfig;
use springboot_wizard::WizardDefaults;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "SPRINGBOOT_CLI_CONFIG";
pub const METADATA_URL_ENV: &str = "SPRINGBOOT_CLI_METADATA_URL";
pub const TIMEOUT_ENV: &str = "SPRINGBOOT_CLI_TIMEOUT_SECS";
pub const OFFLINE_ENV: &str = "SPRINGBOOT_CLI_OFFLINE";

const CONFIG_DIR_NAME: &str = "springboot-cli";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    #[serde(default)]
    metadata: RawMetadata,
    #[serde(default)]
    defaults: RawDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMetadata {
    url: Option<String>,
    timeout_secs: Option<u64>,
    offline: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefaults {
    group: Option<String>,
    description: Option<String>,
}

/// Values given on the command line; `None`/`false` leaves lower layers alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub metadata_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub offline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub metadata: MetadataConfig,
    pub defaults: WizardDefaults,
    /// Settings file that was applied, if any
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn load(explicit: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let default_path =
            dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        Self::load_with(explicit, default_path.as_deref(), overrides, |key| {
            env::var(key).ok()
        })
    }

    /// Same as [`load`](Self::load) with an injectable default path and env lookup
    pub fn load_with<F>(
        explicit: Option<&Path>,
        default_path: Option<&Path>,
        overrides: &Overrides,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = settings_path(explicit, default_path, &lookup) {
            settings.apply_file(&path)?;
        }
        settings.apply_env(&lookup)?;
        settings.apply_overrides(overrides);

        settings
            .metadata
            .validate()
            .context("Invalid metadata settings")?;
        settings.defaults.validate().context("Invalid wizard defaults")?;
        Ok(settings)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let raw: RawSettings = toml::from_str(&text)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;

        if let Some(url) = raw.metadata.url {
            self.metadata.url = url;
        }
        if let Some(secs) = raw.metadata.timeout_secs {
            self.metadata.timeout = Duration::from_secs(secs);
        }
        if let Some(offline) = raw.metadata.offline {
            self.metadata.offline = offline;
        }
        if let Some(group) = raw.defaults.group {
            self.defaults.group = group;
        }
        if let Some(description) = raw.defaults.description {
            self.defaults.description = description;
        }

        log::debug!("Loaded settings from {}", path.display());
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(METADATA_URL_ENV) {
            self.metadata.url = url;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|err| {
                anyhow!("{TIMEOUT_ENV}={secs:?} is not a number of seconds: {err}")
            })?;
            self.metadata.timeout = Duration::from_secs(secs);
        }
        if let Some(offline) = lookup(OFFLINE_ENV) {
            self.metadata.offline = truthy(&offline);
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(url) = &overrides.metadata_url {
            self.metadata.url = url.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.metadata.timeout = Duration::from_secs(secs);
        }
        if overrides.offline {
            self.metadata.offline = true;
        }
    }
}

fn settings_path<F>(
    explicit: Option<&Path>,
    default_path: Option<&Path>,
    lookup: &F,
) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = lookup(CONFIG_ENV).filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    // The per-user file is optional; explicit paths must exist.
    default_path.filter(|p| p.is_file()).map(Path::to_path_buf)
}

fn truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
