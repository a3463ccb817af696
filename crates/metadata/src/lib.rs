//! # SpringBoot Metadata
//!
//! Platform versions and the dependency catalog offered by the wizard.
//!
//! ## Architecture
//!
//! ```text
//! MetadataProvider
//!     │
//!     ├──> MetadataSource::fetch_document()      (HTTP GET, or offline)
//!     │        │
//!     │        ├─ Ok(document) ──> filter versions, flatten catalog
//!     │        └─ Err(_) ───────┐
//!     │                         ▼
//!     └──> FallbackCatalog (static, revision-labelled table)
//! ```
//!
//! The document is resolved at most once per provider; a failure is logged
//! once and never reaches the caller.

mod catalog;
mod config;
mod document;
mod error;
mod provider;
mod source;

pub use catalog::{DependencyCatalogEntry, FallbackCatalog};
pub use config::{MetadataConfig, DEFAULT_METADATA_URL};
pub use document::{
    is_release_version, BootVersions, DependencyGroup, DependencyGroups, DependencyItem,
    MetadataDocument, VersionEntry,
};
pub use error::{MetadataError, Result};
pub use provider::{MetadataOrigin, MetadataProvider, ResolvedMetadata};
pub use source::{HttpMetadataSource, MetadataSource, OfflineSource};
