mod support;

use pretty_assertions::assert_eq;
use springboot_wizard::stages::collect_stack;
use springboot_wizard::{
    Answer, BuildTool, ConfigurationType, Database, JavaVersion, NoticeLevel, Packaging,
    ScriptedInteraction, TranscriptEvent, Wizard, WizardDefaults, WizardError,
};
use support::{document, offline_provider, remote_provider};

fn offline_script() -> Vec<Answer> {
    vec![
        // identity
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        // stack
        Answer::Default,
        Answer::Default,
        Answer::pick("gradle"),
        Answer::Default,
        Answer::Default,
        // database
        Answer::pick("postgresql"),
        // dependencies
        Answer::Default,
        Answer::Confirm(true),
        Answer::pick("search"),
        Answer::text("driver"),
        Answer::pick_many(["mysql"]),
        Answer::text(""),
    ]
}

#[tokio::test]
async fn offline_run_uses_fallback_data_and_warns_once() {
    let provider = offline_provider();
    let mut ui = ScriptedInteraction::new(offline_script());

    let config = Wizard::new(&provider)
        .run(&mut ui, Some("my-app"))
        .await
        .unwrap();

    assert_eq!(config.identity().artifact, "my-app");
    assert_eq!(config.identity().package_name, "com.example.myapp");
    assert_eq!(config.stack().java_version, JavaVersion::V17);
    assert_eq!(config.stack().spring_boot_version, "3.4.1");
    assert_eq!(config.stack().build_tool, BuildTool::Gradle);
    assert_eq!(config.stack().packaging, Packaging::Jar);
    assert_eq!(config.stack().configuration_type, ConfigurationType::Properties);
    assert_eq!(config.database(), Database::Postgresql);
    assert_eq!(
        config.dependencies().as_slice(),
        ["data-jpa", "postgresql", "mysql"]
    );

    let warnings: Vec<&str> = ui
        .notices()
        .into_iter()
        .filter(|(level, _)| *level == NoticeLevel::Warning)
        .map(|(_, message)| message)
        .collect();
    assert_eq!(
        warnings,
        vec!["Failed to fetch Spring metadata (Offline mode: remote metadata disabled), using fallback static data..."]
    );
    assert_eq!(ui.remaining(), 0);
}

#[tokio::test]
async fn sections_come_in_stage_order() {
    let provider = offline_provider();
    let mut ui = ScriptedInteraction::new(offline_script());
    Wizard::new(&provider)
        .run(&mut ui, Some("my-app"))
        .await
        .unwrap();

    let sections: Vec<&str> = ui
        .notices()
        .into_iter()
        .filter(|(level, _)| *level == NoticeLevel::Section)
        .map(|(_, message)| message)
        .collect();
    assert_eq!(
        sections,
        vec!["Project Configuration", "Technical Stack", "Database", "Dependencies"]
    );
}

#[tokio::test]
async fn fallback_versions_are_releases_only() {
    let provider = offline_provider();
    let versions = provider.fetch_versions().await;
    assert_eq!(versions.len(), 5);
    assert!(versions
        .iter()
        .all(|v| !v.contains("SNAPSHOT") && !v.contains('M')));
}

#[tokio::test]
async fn stack_stage_offers_only_release_versions() {
    let provider = remote_provider(document(
        &["3.5.0-SNAPSHOT", "3.5.0-M1", "3.4.1", "3.3.6"],
        &[("Web", &[("web", "Spring Web")])],
    ));
    let mut ui = ScriptedInteraction::new([
        Answer::pick("21"),
        Answer::pick("3.3.6"),
        Answer::pick("gradle-kotlin"),
        Answer::pick("war"),
        Answer::pick("yaml"),
    ]);

    let stack = collect_stack(&mut ui, &provider).await.unwrap();
    assert_eq!(stack.java_version, JavaVersion::V21);
    assert_eq!(stack.spring_boot_version, "3.3.6");
    assert_eq!(stack.build_tool, BuildTool::GradleKotlin);
    assert_eq!(stack.packaging, Packaging::War);
    assert_eq!(stack.configuration_type, ConfigurationType::Yaml);
    assert!(!ui
        .notices()
        .iter()
        .any(|(level, _)| *level == NoticeLevel::Warning));
    assert!(ui
        .transcript()
        .contains(&TranscriptEvent::TaskFinished("Spring Boot versions loaded".to_string())));
}

#[tokio::test]
async fn unoffered_version_is_rejected() {
    let provider = remote_provider(document(&["3.4.1"], &[("Web", &[("web", "Spring Web")])]));
    let mut ui = ScriptedInteraction::new([Answer::Default, Answer::pick("3.5.0-M1")]);
    let err = collect_stack(&mut ui, &provider).await.unwrap_err();
    assert!(err.is_interaction(), "{err}");
}

#[tokio::test]
async fn remote_run_without_database_collects_nothing_extra() {
    let provider = remote_provider(document(
        &["3.4.1"],
        &[
            ("Web", &[("web", "Spring Web")]),
            ("Messaging", &[("kafka", "Spring for Apache Kafka")]),
        ],
    ));
    let mut ui = ScriptedInteraction::new([
        Answer::text("inventory"),
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default, // database: none
        Answer::pick_many(["web"]),
        Answer::Confirm(true),
        Answer::pick("browse"),
        Answer::pick_many(["kafka"]),
    ]);

    let config = Wizard::new(&provider).run(&mut ui, None).await.unwrap();
    assert_eq!(config.identity().project_name, "inventory");
    assert_eq!(config.database(), Database::None);
    assert_eq!(config.dependencies().as_slice(), ["web", "kafka"]);
    assert!(ui
        .notices()
        .contains(&(NoticeLevel::Success, "Selected 2 total dependencies")));
}

#[tokio::test]
async fn exhausted_answers_abort_the_run() {
    let provider = offline_provider();
    let mut script = offline_script();
    script.truncate(6);
    let mut ui = ScriptedInteraction::new(script);

    let err = Wizard::new(&provider)
        .run(&mut ui, Some("my-app"))
        .await
        .unwrap_err();
    assert!(err.is_interaction());
    assert!(err.to_string().contains("Build tool:"), "{err}");
}

#[tokio::test]
async fn invalid_defaults_fail_before_any_question() {
    let provider = offline_provider();
    let mut ui = ScriptedInteraction::new([]);
    let defaults = WizardDefaults {
        group: "Not A Group".to_string(),
        ..WizardDefaults::default()
    };

    let err = Wizard::new(&provider)
        .with_defaults(defaults)
        .run(&mut ui, Some("my-app"))
        .await
        .unwrap_err();
    assert!(matches!(err, WizardError::InvalidDefaults(_)));
    assert!(ui.transcript().is_empty());
}
