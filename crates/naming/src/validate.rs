use crate::error::{Field, Result, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Signature shared by every identifier check, so prompts can carry one as a value.
pub type Validator = fn(&str) -> Result<()>;

static PROJECT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("project name pattern"));

// Dotted lowercase identifier: each segment starts with a letter.
static DOTTED_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$").expect("package pattern")
});

static ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("artifact pattern"));

fn require(input: &str, field: Field) -> Result<()> {
    if input.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Letters, digits, `-` and `_` only.
pub fn validate_project_name(input: &str) -> Result<()> {
    require(input, Field::ProjectName)?;
    if !PROJECT_NAME.is_match(input) {
        return Err(ValidationError::ProjectNameCharset);
    }
    Ok(())
}

pub fn validate_group(input: &str) -> Result<()> {
    require(input, Field::Group)?;
    if !DOTTED_IDENTIFIER.is_match(input) {
        return Err(ValidationError::GroupSyntax);
    }
    Ok(())
}

pub fn validate_artifact(input: &str) -> Result<()> {
    require(input, Field::Artifact)?;
    if !ARTIFACT.is_match(input) {
        return Err(ValidationError::ArtifactSyntax);
    }
    Ok(())
}

pub fn validate_package_name(input: &str) -> Result<()> {
    require(input, Field::PackageName)?;
    if !DOTTED_IDENTIFIER.is_match(input) {
        return Err(ValidationError::PackageNameSyntax);
    }
    Ok(())
}
