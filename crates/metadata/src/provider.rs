use crate::catalog::{DependencyCatalogEntry, FallbackCatalog};
use crate::config::MetadataConfig;
use crate::error::Result;
use crate::source::{HttpMetadataSource, MetadataSource, OfflineSource};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;

/// Where the resolved data came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOrigin {
    /// Everything came from the remote document
    Remote,
    /// The document was usable but some part was empty and got substituted
    Partial { reason: String },
    /// The fetch failed; everything came from the fallback table
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct ResolvedMetadata {
    /// Release versions, newest first
    pub versions: Vec<String>,
    pub catalog: Vec<DependencyCatalogEntry>,
    pub origin: MetadataOrigin,
}

impl ResolvedMetadata {
    /// Warning to surface to the user, if the remote data was not used as-is
    pub fn warning(&self) -> Option<String> {
        match &self.origin {
            MetadataOrigin::Remote => None,
            MetadataOrigin::Partial { reason } => Some(format!(
                "Spring metadata incomplete ({reason}), using fallback static data..."
            )),
            MetadataOrigin::Fallback { reason } => Some(format!(
                "Failed to fetch Spring metadata ({reason}), using fallback static data..."
            )),
        }
    }
}

/// Versions and catalog for one wizard run.
///
/// The underlying document is fetched at most once; later calls reuse it.
pub struct MetadataProvider {
    source: Box<dyn MetadataSource>,
    fallback: FallbackCatalog,
    resolved: OnceCell<ResolvedMetadata>,
    warned: AtomicBool,
}

impl MetadataProvider {
    pub fn new(source: Box<dyn MetadataSource>, fallback: FallbackCatalog) -> Self {
        Self {
            source,
            fallback,
            resolved: OnceCell::new(),
            warned: AtomicBool::new(false),
        }
    }

    /// HTTP-backed provider, or an offline one when the config says so
    pub fn from_config(config: &MetadataConfig, fallback: FallbackCatalog) -> Result<Self> {
        let source: Box<dyn MetadataSource> = if config.offline {
            Box::new(OfflineSource)
        } else {
            Box::new(HttpMetadataSource::new(config)?)
        };
        Ok(Self::new(source, fallback))
    }

    /// Resolve the document, substituting fallback data on any failure
    pub async fn resolve(&self) -> &ResolvedMetadata {
        self.resolved.get_or_init(|| self.load()).await
    }

    pub async fn fetch_versions(&self) -> Vec<String> {
        self.resolve().await.versions.clone()
    }

    pub async fn fetch_dependency_catalog(&self) -> Vec<DependencyCatalogEntry> {
        self.resolve().await.catalog.clone()
    }

    /// The fallback warning, handed out once per provider.
    ///
    /// `None` before resolution, when the remote data was used as-is, and on
    /// every call after the first that returned `Some`.
    pub fn take_warning(&self) -> Option<String> {
        let warning = self.resolved.get()?.warning()?;
        if self.warned.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(warning)
    }

    async fn load(&self) -> ResolvedMetadata {
        let document = match self.source.fetch_document().await {
            Ok(document) => document,
            Err(err) => {
                log::debug!(
                    "Failed to fetch Spring metadata from {}: {err}; using fallback data (revision {})",
                    self.source.describe(),
                    self.fallback.revision
                );
                return ResolvedMetadata {
                    versions: self.fallback.versions.clone(),
                    catalog: self.fallback.dependencies.clone(),
                    origin: MetadataOrigin::Fallback {
                        reason: err.to_string(),
                    },
                };
            }
        };

        let mut versions = document.release_versions();
        let mut catalog = document.catalog();
        let mut missing = Vec::new();
        if versions.is_empty() {
            missing.push("no release versions");
            versions = self.fallback.versions.clone();
        }
        if catalog.is_empty() {
            missing.push("empty dependency catalog");
            catalog = self.fallback.dependencies.clone();
        }

        let origin = if missing.is_empty() {
            log::debug!(
                "Loaded Spring metadata from {}: {} versions, {} dependencies",
                self.source.describe(),
                versions.len(),
                catalog.len()
            );
            MetadataOrigin::Remote
        } else {
            let reason = missing.join(", ");
            log::debug!(
                "Spring metadata from {} is incomplete ({reason}); using fallback data (revision {})",
                self.source.describe(),
                self.fallback.revision
            );
            MetadataOrigin::Partial { reason }
        };

        ResolvedMetadata {
            versions,
            catalog,
            origin,
        }
    }
}
