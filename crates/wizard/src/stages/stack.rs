use super::ask_choosable;
use crate::error::{Result, WizardError};
use crate::interaction::{Choice, ChoiceQuestion, Interaction, NoticeLevel};
use crate::model::TechnicalStack;
use springboot_metadata::MetadataProvider;

/// Java version, Spring Boot version, build tool, packaging, configuration.
pub async fn collect_stack(
    ui: &mut dyn Interaction,
    provider: &MetadataProvider,
) -> Result<TechnicalStack> {
    ui.notify(NoticeLevel::Section, "Technical Stack");

    ui.task_started("Fetching Spring Boot versions...");
    let versions = provider.fetch_versions().await;
    ui.task_finished("Spring Boot versions loaded");
    if let Some(warning) = provider.take_warning() {
        ui.notify(NoticeLevel::Warning, &warning);
    }

    if versions.is_empty() {
        return Err(WizardError::other("no Spring Boot versions available"));
    }

    let java_version = ask_choosable(ui, "Java version:")?;

    let spring_boot_version = ui.ask_choice(&ChoiceQuestion {
        message: "Spring Boot version:".to_string(),
        choices: versions.iter().map(|v| Choice::new(v.clone(), v.clone())).collect(),
        default: 0,
    })?;
    if !versions.contains(&spring_boot_version) {
        return Err(WizardError::UnknownChoice {
            question: "Spring Boot version:".to_string(),
            value: spring_boot_version,
        });
    }

    let build_tool = ask_choosable(ui, "Build tool:")?;
    let packaging = ask_choosable(ui, "Packaging:")?;
    let configuration_type = ask_choosable(ui, "Configuration:")?;

    Ok(TechnicalStack {
        java_version,
        spring_boot_version,
        build_tool,
        packaging,
        configuration_type,
    })
}
