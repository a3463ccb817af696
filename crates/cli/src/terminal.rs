//! Terminal rendering of the wizard's questions.
//!
//! Prompts, notices and spinners all draw on stderr, leaving stdout free for
//! `create --json`.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use springboot_wizard::{
    ChoiceQuestion, ConfirmQuestion, Interaction, InteractionError, MultiChoiceEntry,
    MultiChoiceQuestion, NoticeLevel, TextQuestion,
};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(80);

pub struct TerminalInteraction {
    term: Term,
    theme: ColorfulTheme,
    spinner: Option<ProgressBar>,
}

impl TerminalInteraction {
    /// Fails when stderr is not attached to a terminal
    pub fn new() -> Result<Self, InteractionError> {
        let term = Term::stderr();
        if !term.is_term() {
            return Err(InteractionError::NotATerminal);
        }
        Ok(Self {
            term,
            theme: ColorfulTheme::default(),
            spinner: None,
        })
    }

    fn line(&self, text: &str) {
        // Notices are best effort; a closed stderr must not abort the wizard.
        let _ = self.term.write_line(text);
    }
}

fn prompt_error(err: dialoguer::Error) -> InteractionError {
    let dialoguer::Error::IO(err) = err;
    InteractionError::Io(err)
}

impl Interaction for TerminalInteraction {
    fn ask_text(&mut self, question: &TextQuestion) -> Result<String, InteractionError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(question.message.trim_end_matches(':'))
            .allow_empty(question.default.is_none());
        if let Some(default) = &question.default {
            input = input.default(default.clone());
        }
        if let Some(validate) = question.validator {
            input = input.validate_with(move |answer: &String| validate(answer));
        }
        input.interact_text_on(&self.term).map_err(prompt_error)
    }

    fn ask_choice(&mut self, question: &ChoiceQuestion) -> Result<String, InteractionError> {
        let labels: Vec<&str> = question.choices.iter().map(|c| c.label.as_str()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(question.message.trim_end_matches(':'))
            .items(&labels)
            .default(question.default)
            .interact_on(&self.term)
            .map_err(prompt_error)?;
        question
            .choices
            .get(index)
            .map(|choice| choice.value.clone())
            .ok_or_else(|| InteractionError::UnexpectedAnswer {
                question: question.message.clone(),
                answer: index.to_string(),
            })
    }

    fn ask_multi_choice(
        &mut self,
        question: &MultiChoiceQuestion,
    ) -> Result<Vec<String>, InteractionError> {
        let rows = selectable_rows(&question.entries);
        let items: Vec<(String, bool)> = rows
            .iter()
            .map(|row| (row.label.clone(), row.checked))
            .collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(question.message.trim_end_matches(':'))
            .items_checked(&items)
            .max_length(question.page_size)
            .interact_on(&self.term)
            .map_err(prompt_error)?;

        Ok(picked
            .into_iter()
            .filter_map(|index| rows.get(index).map(|row| row.value.to_string()))
            .collect())
    }

    fn ask_confirm(&mut self, question: &ConfirmQuestion) -> Result<bool, InteractionError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(question.message.as_str())
            .default(question.default)
            .interact_on(&self.term)
            .map_err(prompt_error)
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        let text = match level {
            NoticeLevel::Section => format!("\n{}\n", style(message).bold().cyan()),
            NoticeLevel::Info => format!("{} {message}", style("ℹ").blue()),
            NoticeLevel::Success => format!("{} {}", style("✔").green(), style(message).green()),
            NoticeLevel::Warning => format!("{} {}", style("⚠").yellow(), style(message).yellow()),
        };
        self.line(&text);
    }

    fn task_started(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        if let Some(previous) = self.spinner.replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn task_finished(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        self.line(&format!("{} {message}", style("✔").green()));
    }
}

struct SelectableRow<'a> {
    label: String,
    checked: bool,
    value: &'a str,
}

/// MultiSelect has no separators, so section titles become a prefix of the
/// items below them instead of checkable rows.
fn selectable_rows(entries: &[MultiChoiceEntry]) -> Vec<SelectableRow<'_>> {
    let mut section: Option<&str> = None;
    let mut rows = Vec::new();
    for entry in entries {
        match entry {
            MultiChoiceEntry::Section(title) => {
                let title = title.trim_matches(|c: char| c == '─' || c.is_whitespace());
                section = (!title.is_empty()).then_some(title);
            }
            MultiChoiceEntry::Item {
                label,
                value,
                checked,
            } => rows.push(SelectableRow {
                label: match section {
                    Some(title) => format!("{} › {label}", style(title).dim()),
                    None => label.clone(),
                },
                checked: *checked,
                value,
            }),
        }
    }
    rows
}

impl Drop for TerminalInteraction {
    fn drop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        let _ = self.term.show_cursor();
    }
}
