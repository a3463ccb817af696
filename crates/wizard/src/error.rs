use thiserror::Error;

/// Result type for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

/// The interaction surface could not ask a question or read its answer
#[derive(Error, Debug)]
pub enum InteractionError {
    /// No terminal to render prompts on
    #[error("Prompt couldn't be rendered in the current environment")]
    NotATerminal,

    #[error("Failed to read answer: {0}")]
    Io(#[from] std::io::Error),

    /// Scripted interaction ran out of answers
    #[error("No scripted answer left for '{question}'")]
    ScriptExhausted { question: String },

    /// Scripted answer does not fit the question kind or its choices
    #[error("Scripted answer {answer} does not fit '{question}'")]
    UnexpectedAnswer { question: String, answer: String },
}

/// Fatal wizard failure. The run is aborted and nothing is kept.
#[derive(Error, Debug)]
pub enum WizardError {
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    /// An answer named a value the question never offered
    #[error("Unknown choice '{value}' for '{question}'")]
    UnknownChoice { question: String, value: String },

    /// Invalid wizard defaults
    #[error("Invalid defaults: {0}")]
    InvalidDefaults(String),

    #[error("{0}")]
    Other(String),
}

impl WizardError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// True when the failure comes from the interaction surface itself
    pub fn is_interaction(&self) -> bool {
        matches!(self, Self::Interaction(_))
    }
}
