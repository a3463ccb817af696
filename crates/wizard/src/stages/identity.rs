use crate::defaults::WizardDefaults;
use crate::error::Result;
use crate::interaction::{Interaction, NoticeLevel, TextQuestion};
use crate::model::ProjectIdentity;
use springboot_naming::{
    artifact_from_name, package_name_from_group_and_artifact, validate_artifact, validate_group,
    validate_package_name, validate_project_name,
};

/// Project name, group, artifact, description and package, in that order.
///
/// A valid `provided_name` (e.g. from the command line) is taken without
/// asking; an invalid one is reported and then asked for again.
pub fn collect_identity(
    ui: &mut dyn Interaction,
    provided_name: Option<&str>,
    defaults: &WizardDefaults,
) -> Result<ProjectIdentity> {
    ui.notify(NoticeLevel::Section, "Project Configuration");

    let name_question = TextQuestion::new("Project name:").with_validator(validate_project_name);
    let project_name = match provided_name.filter(|name| !name.is_empty()) {
        Some(name) => match validate_project_name(name) {
            Ok(()) => {
                ui.notify(
                    NoticeLevel::Info,
                    &format!("Project name: {name} (from argument)"),
                );
                name.to_string()
            }
            Err(reason) => {
                ui.notify(
                    NoticeLevel::Warning,
                    &format!("Invalid project name provided: {reason}"),
                );
                ui.notify(NoticeLevel::Info, "Please provide a valid project name:");
                ui.ask_text(&name_question)?
            }
        },
        None => ui.ask_text(&name_question)?,
    };

    let group = ui.ask_text(
        &TextQuestion::new("Group:")
            .with_default(defaults.group.clone())
            .with_validator(validate_group),
    )?;

    let artifact = ui.ask_text(&with_derived_default(
        TextQuestion::new("Artifact:").with_validator(validate_artifact),
        artifact_from_name(&project_name),
    ))?;

    let description = ui.ask_text(
        &TextQuestion::new("Description:").with_default(defaults.description.clone()),
    )?;

    let package_name = ui.ask_text(&with_derived_default(
        TextQuestion::new("Package name:").with_validator(validate_package_name),
        package_name_from_group_and_artifact(&group, &artifact),
    ))?;

    log::debug!("identity: {project_name} {group}:{artifact} ({package_name})");

    Ok(ProjectIdentity {
        project_name,
        group,
        artifact,
        description,
        package_name,
    })
}

// An empty derivation is no default at all.
fn with_derived_default(question: TextQuestion, derived: String) -> TextQuestion {
    if derived.is_empty() {
        question
    } else {
        question.with_default(derived)
    }
}
