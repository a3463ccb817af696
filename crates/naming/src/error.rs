use std::fmt;
use thiserror::Error;

/// Result type for validation checks
pub type Result<T> = std::result::Result<T, ValidationError>;

/// The identifier a validator is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProjectName,
    Group,
    Artifact,
    PackageName,
}

impl Field {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProjectName => "Project name",
            Self::Group => "Group",
            Self::Artifact => "Artifact",
            Self::PackageName => "Package name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an identifier was rejected. `Display` is the reason shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty or whitespace-only input
    #[error("{0} is required")]
    Required(Field),

    #[error("Project name can only contain letters, numbers, hyphens, and underscores")]
    ProjectNameCharset,

    #[error("Group must be a valid package name (e.g., com.example)")]
    GroupSyntax,

    #[error(
        "Artifact must start with a letter and contain only lowercase letters, numbers, and hyphens"
    )]
    ArtifactSyntax,

    #[error("Package name must be a valid Java package name")]
    PackageNameSyntax,
}

impl ValidationError {
    /// The field the rejection applies to
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) => *field,
            Self::ProjectNameCharset => Field::ProjectName,
            Self::GroupSyntax => Field::Group,
            Self::ArtifactSyntax => Field::Artifact,
            Self::PackageNameSyntax => Field::PackageName,
        }
    }
}
