//! # SpringBoot Naming
//!
//! Pure helpers for the identifiers a generated project carries: the
//! project name, the Maven-style group and artifact, and the Java package.
//!
//! ```text
//! "My Cool App!!" ──artifact_from_name──> "my-cool-app"
//!                                              │
//! "com.example" ─────────┬─────────────────────┘
//!                        └──package_name_from_group_and_artifact──> "com.example.mycoolapp"
//! ```
//!
//! Validators never panic and never allocate beyond the error value; the
//! same input always yields the same verdict.
//!
//! ## Example
//!
//! ```rust
//! use springboot_naming::{artifact_from_name, package_name_from_group_and_artifact, validate_package_name};
//!
//! let artifact = artifact_from_name("my-app");
//! let package = package_name_from_group_and_artifact("com.example", &artifact);
//! assert_eq!(package, "com.example.myapp");
//! assert!(validate_package_name(&package).is_ok());
//! ```

mod derive;
mod error;
mod validate;

pub use derive::{artifact_from_name, package_name_from_group_and_artifact};
pub use error::{Field, Result, ValidationError};
pub use validate::{
    validate_artifact, validate_group, validate_package_name, validate_project_name, Validator,
};
