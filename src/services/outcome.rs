use crate::constants::prompts::{
    EMPTY_MESSAGE_REPLY, NOTE_EMPTY_STATUS, NOTE_ID_MISSING_STATUS, NOT_ENOUGH_DATA_FOR_ANSWERS,
    NO_NOTES_FOR_QUIZ,
};

/// Why a request was turned away before any external call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyMessage,
    NoNotesForQuiz,
    NotEnoughDataForAnswers,
    EmptyNote,
    MissingNoteId,
}

impl Rejection {
    /// Human-readable placeholder returned to the client with a 200.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::EmptyMessage => EMPTY_MESSAGE_REPLY,
            Rejection::NoNotesForQuiz => NO_NOTES_FOR_QUIZ,
            Rejection::NotEnoughDataForAnswers => NOT_ENOUGH_DATA_FOR_ANSWERS,
            Rejection::EmptyNote => NOTE_EMPTY_STATUS,
            Rejection::MissingNoteId => NOTE_ID_MISSING_STATUS,
        }
    }
}

/// Result of a business operation that did not fail externally.
///
/// External failures travel separately as `Err(AppError)`, so callers
/// see three cases: completed, rejected on input, or failed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Completed(value) => Outcome::Completed(f(value)),
            Outcome::Rejected(rejection) => Outcome::Rejected(rejection),
        }
    }
}

impl Outcome<String> {
    /// Collapses the outcome into the text sent back to the client.
    pub fn into_text(self) -> String {
        match self {
            Outcome::Completed(text) => text,
            Outcome::Rejected(rejection) => rejection.message().to_string(),
        }
    }
}
