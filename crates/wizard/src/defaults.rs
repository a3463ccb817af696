use crate::error::{Result, WizardError};
use springboot_naming::validate_group;

pub const DEFAULT_GROUP: &str = "com.example";
pub const DEFAULT_DESCRIPTION: &str = "Demo project for Spring Boot";

/// Prompt defaults for the identity stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDefaults {
    pub group: String,
    pub description: String,
}

impl Default for WizardDefaults {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl WizardDefaults {
    pub fn validate(&self) -> Result<()> {
        validate_group(&self.group)
            .map_err(|err| WizardError::InvalidDefaults(format!("group '{}': {err}", self.group)))
    }
}
