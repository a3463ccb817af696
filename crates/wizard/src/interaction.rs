use crate::error::InteractionError;
use springboot_naming::Validator;

/// Free-text question.
///
/// Empty input resolves to `default` when one is set. Implementations keep
/// asking until `validator` (if any) accepts the resolved answer, showing the
/// rejection reason each time.
#[derive(Debug, Clone)]
pub struct TextQuestion {
    pub message: String,
    pub default: Option<String>,
    pub validator: Option<Validator>,
}

impl TextQuestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            validator: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Pick exactly one of `choices`; `default` indexes into them.
#[derive(Debug, Clone)]
pub struct ChoiceQuestion {
    pub message: String,
    pub choices: Vec<Choice>,
    pub default: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiChoiceEntry {
    /// Non-selectable heading
    Section(String),
    Item {
        label: String,
        value: String,
        checked: bool,
    },
}

/// Pick any subset of the items.
#[derive(Debug, Clone)]
pub struct MultiChoiceQuestion {
    pub message: String,
    pub entries: Vec<MultiChoiceEntry>,
    /// Rows visible at once
    pub page_size: usize,
}

impl MultiChoiceQuestion {
    /// Values of every selectable item, in display order
    pub fn item_values(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                MultiChoiceEntry::Item { value, .. } => Some(value.as_str()),
                MultiChoiceEntry::Section(_) => None,
            })
            .collect()
    }

    /// Values of the pre-checked items
    pub fn checked_values(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                MultiChoiceEntry::Item {
                    value,
                    checked: true,
                    ..
                } => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmQuestion {
    pub message: String,
    pub default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Stage heading
    Section,
    Info,
    Success,
    Warning,
}

/// Ask a question and return a validated answer.
///
/// Exactly one question is outstanding at a time; every call blocks until
/// the user answers. An `Err` is fatal for the whole run.
pub trait Interaction {
    fn ask_text(&mut self, question: &TextQuestion) -> Result<String, InteractionError>;

    /// Returns the chosen value
    fn ask_choice(&mut self, question: &ChoiceQuestion) -> Result<String, InteractionError>;

    /// Returns the chosen item values in display order
    fn ask_multi_choice(
        &mut self,
        question: &MultiChoiceQuestion,
    ) -> Result<Vec<String>, InteractionError>;

    fn ask_confirm(&mut self, question: &ConfirmQuestion) -> Result<bool, InteractionError>;

    fn notify(&mut self, level: NoticeLevel, message: &str);

    /// A slow operation (remote fetch) begins
    fn task_started(&mut self, message: &str);

    fn task_finished(&mut self, message: &str);
}
