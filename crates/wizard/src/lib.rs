//! # SpringBoot Wizard
//!
//! Collects everything a Spring Boot project generator needs, one question
//! at a time, and hands back a single immutable [`ProjectConfiguration`].
//!
//! ## Architecture
//!
//! ```text
//! Wizard::run
//!     │
//!     ├──> identity stage      name → group → artifact → description → package
//!     │                        (artifact/package defaults derived from earlier answers)
//!     ├──> stack stage         versions from MetadataProvider, five fixed choices
//!     ├──> database stage      single choice, default "none"
//!     └──> dependency stage    AutoSelect → Popular → AskMore
//!                                 → MethodChoice → {Search | Browse | skip} → Done
//! ```
//!
//! Every question goes through the [`Interaction`] capability. The terminal
//! implementation lives in the CLI; [`ScriptedInteraction`] replays canned
//! answers so each stage can be driven without a terminal.

mod assembler;
mod defaults;
mod error;
mod interaction;
mod model;
mod scripted;
pub mod stages;

pub use assembler::Wizard;
pub use defaults::WizardDefaults;
pub use error::{InteractionError, Result, WizardError};
pub use interaction::{
    Choice, ChoiceQuestion, ConfirmQuestion, Interaction, MultiChoiceEntry, MultiChoiceQuestion,
    NoticeLevel, TextQuestion,
};
pub use model::{
    BuildTool, Choosable, ConfigurationType, Database, DependencySelection, JavaVersion,
    Packaging, ProjectConfiguration, ProjectIdentity, TechnicalStack,
};
pub use scripted::{Answer, ScriptedInteraction, TranscriptEvent};
pub use stages::dependencies::{DependencyStage, DependencyState, LookupMethod};
