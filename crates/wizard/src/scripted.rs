use crate::error::InteractionError;
use crate::interaction::{
    ChoiceQuestion, ConfirmQuestion, Interaction, MultiChoiceQuestion, NoticeLevel, TextQuestion,
};
use std::collections::VecDeque;

/// One canned answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text; empty text takes the question's default
    Text(String),
    /// Accept whatever the question pre-fills
    Default,
    /// Value of a single-choice option
    Pick(String),
    /// Values of multi-choice items, replacing the pre-checked set
    PickMany(Vec<String>),
    Confirm(bool),
}

impl Answer {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn pick(value: impl Into<String>) -> Self {
        Self::Pick(value.into())
    }

    pub fn pick_many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::PickMany(values.into_iter().map(Into::into).collect())
    }

    pub fn none() -> Self {
        Self::PickMany(Vec::new())
    }
}

/// Everything the scripted surface saw, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    Asked {
        message: String,
    },
    /// Multi-choice items offered, with the pre-checked subset
    Offered {
        message: String,
        values: Vec<String>,
        checked: Vec<String>,
    },
    Rejected {
        message: String,
        answer: String,
        reason: String,
    },
    Notice {
        level: NoticeLevel,
        message: String,
    },
    TaskStarted(String),
    TaskFinished(String),
}

/// [`Interaction`] that replays a fixed queue of answers.
///
/// Text answers that fail the question's validator are recorded as
/// rejections and the next answer is tried, the way a user re-types after
/// seeing the reason.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<Answer>,
    transcript: Vec<TranscriptEvent>,
}

impl ScriptedInteraction {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[TranscriptEvent] {
        &self.transcript
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Messages of every question asked
    pub fn questions(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                TranscriptEvent::Asked { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, &str)> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                TranscriptEvent::Notice { level, message } => Some((*level, message.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Rejection reasons in order
    pub fn rejections(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                TranscriptEvent::Rejected { reason, .. } => Some(reason.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Item values of each multi-choice list offered, in order
    pub fn offered(&self) -> Vec<&[String]> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                TranscriptEvent::Offered { values, .. } => Some(values.as_slice()),
                _ => None,
            })
            .collect()
    }

    fn next_answer(&mut self, question: &str) -> Result<Answer, InteractionError> {
        self.answers
            .pop_front()
            .ok_or_else(|| InteractionError::ScriptExhausted {
                question: question.to_string(),
            })
    }

    fn asked(&mut self, message: &str) {
        self.transcript.push(TranscriptEvent::Asked {
            message: message.to_string(),
        });
    }
}

fn unexpected(question: &str, answer: &Answer) -> InteractionError {
    InteractionError::UnexpectedAnswer {
        question: question.to_string(),
        answer: format!("{answer:?}"),
    }
}

impl Interaction for ScriptedInteraction {
    fn ask_text(&mut self, question: &TextQuestion) -> Result<String, InteractionError> {
        self.asked(&question.message);
        loop {
            let answer = self.next_answer(&question.message)?;
            let typed = match &answer {
                Answer::Text(text) => text.clone(),
                Answer::Default => String::new(),
                other => return Err(unexpected(&question.message, other)),
            };
            let resolved = match &question.default {
                Some(default) if typed.is_empty() => default.clone(),
                _ => typed,
            };
            if let Some(validate) = question.validator {
                if let Err(reason) = validate(&resolved) {
                    self.transcript.push(TranscriptEvent::Rejected {
                        message: question.message.clone(),
                        answer: resolved,
                        reason: reason.to_string(),
                    });
                    continue;
                }
            }
            return Ok(resolved);
        }
    }

    fn ask_choice(&mut self, question: &ChoiceQuestion) -> Result<String, InteractionError> {
        self.asked(&question.message);
        let answer = self.next_answer(&question.message)?;
        match &answer {
            Answer::Default => question
                .choices
                .get(question.default)
                .map(|choice| choice.value.clone())
                .ok_or_else(|| unexpected(&question.message, &answer)),
            Answer::Pick(value) if question.choices.iter().any(|c| &c.value == value) => {
                Ok(value.clone())
            }
            other => Err(unexpected(&question.message, other)),
        }
    }

    fn ask_multi_choice(
        &mut self,
        question: &MultiChoiceQuestion,
    ) -> Result<Vec<String>, InteractionError> {
        let values: Vec<String> = question
            .item_values()
            .into_iter()
            .map(str::to_string)
            .collect();
        let checked: Vec<String> = question
            .checked_values()
            .into_iter()
            .map(str::to_string)
            .collect();
        self.asked(&question.message);
        self.transcript.push(TranscriptEvent::Offered {
            message: question.message.clone(),
            values: values.clone(),
            checked: checked.clone(),
        });

        let answer = self.next_answer(&question.message)?;
        match &answer {
            Answer::Default => Ok(checked),
            Answer::PickMany(picked) => {
                if let Some(stray) = picked.iter().find(|p| !values.contains(p)) {
                    return Err(InteractionError::UnexpectedAnswer {
                        question: question.message.clone(),
                        answer: stray.clone(),
                    });
                }
                Ok(values
                    .into_iter()
                    .filter(|value| picked.contains(value))
                    .collect())
            }
            other => Err(unexpected(&question.message, other)),
        }
    }

    fn ask_confirm(&mut self, question: &ConfirmQuestion) -> Result<bool, InteractionError> {
        self.asked(&question.message);
        match self.next_answer(&question.message)? {
            Answer::Default => Ok(question.default),
            Answer::Confirm(value) => Ok(value),
            other => Err(unexpected(&question.message, &other)),
        }
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.transcript.push(TranscriptEvent::Notice {
            level,
            message: message.to_string(),
        });
    }

    fn task_started(&mut self, message: &str) {
        self.transcript
            .push(TranscriptEvent::TaskStarted(message.to_string()));
    }

    fn task_finished(&mut self, message: &str) {
        self.transcript
            .push(TranscriptEvent::TaskFinished(message.to_string()));
    }
}
