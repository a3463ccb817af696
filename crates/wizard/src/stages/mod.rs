//! The four ordered interaction stages. Each produces one fragment.

pub mod database;
pub mod dependencies;
pub mod identity;
pub mod stack;

pub use database::collect_database;
pub use dependencies::collect_dependencies;
pub use identity::collect_identity;
pub use stack::collect_stack;

use crate::error::{Result, WizardError};
use crate::interaction::{ChoiceQuestion, Interaction};
use crate::model::Choosable;

/// Ask a single-choice question over every option of `T`
pub(crate) fn ask_choosable<T: Choosable>(ui: &mut dyn Interaction, message: &str) -> Result<T> {
    let question = ChoiceQuestion {
        message: message.to_string(),
        choices: T::choices(),
        default: T::default_index(),
    };
    let value = ui.ask_choice(&question)?;
    T::from_value(&value).ok_or_else(|| WizardError::UnknownChoice {
        question: message.to_string(),
        value,
    })
}
