use crate::defaults::WizardDefaults;
use crate::error::Result;
use crate::interaction::Interaction;
use crate::model::ProjectConfiguration;
use crate::stages::{collect_database, collect_dependencies, collect_identity, collect_stack};
use springboot_metadata::MetadataProvider;

/// Runs the four stages in order and merges their fragments.
///
/// Any stage error aborts the run; no partial configuration is returned.
pub struct Wizard<'a> {
    provider: &'a MetadataProvider,
    defaults: WizardDefaults,
}

impl<'a> Wizard<'a> {
    pub fn new(provider: &'a MetadataProvider) -> Self {
        Self {
            provider,
            defaults: WizardDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: WizardDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub async fn run(
        &self,
        ui: &mut dyn Interaction,
        project_name: Option<&str>,
    ) -> Result<ProjectConfiguration> {
        self.defaults.validate()?;

        log::debug!("wizard: identity stage");
        let identity = collect_identity(ui, project_name, &self.defaults)?;

        log::debug!("wizard: technical stack stage");
        let stack = collect_stack(ui, self.provider).await?;

        log::debug!("wizard: database stage");
        let database = collect_database(ui)?;

        log::debug!("wizard: dependency stage (database={database})");
        let dependencies = collect_dependencies(ui, self.provider, database).await?;

        Ok(ProjectConfiguration::assemble(
            identity,
            stack,
            database,
            dependencies,
        ))
    }
}
