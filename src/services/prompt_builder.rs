//! Fixed-template prompt construction.
//!
//! User text is interpolated verbatim: no escaping, trimming, or length
//! limits are applied to the embedded fields.

use crate::{
    constants::prompts::{
        EXPLANATION_INSTRUCTIONS, EXPLANATION_OUTPUT_SHAPE, QUIZ_ANSWER_INSTRUCTIONS,
        QUIZ_INSTRUCTIONS,
    },
    services::{outcome::Rejection, text_helpers::is_blank},
};

pub fn build_explanation_prompt(message: &str, note_text: &str) -> String {
    format!(
        "{EXPLANATION_INSTRUCTIONS}\n\nUser Message:\n{message}\n\nRelated Notes:\n{note_text}\n\n{EXPLANATION_OUTPUT_SHAPE}\n"
    )
}

pub fn build_quiz_prompt(note_text: &str) -> Result<String, Rejection> {
    if is_blank(note_text) {
        return Err(Rejection::NoNotesForQuiz);
    }

    Ok(format!(
        "{QUIZ_INSTRUCTIONS}\n\nNotes:\n{note_text}\n\nQuiz:\n"
    ))
}

pub fn build_quiz_answer_prompt(note_text: &str, quiz: &str) -> Result<String, Rejection> {
    if is_blank(note_text) || is_blank(quiz) {
        return Err(Rejection::NotEnoughDataForAnswers);
    }

    Ok(format!(
        "{QUIZ_ANSWER_INSTRUCTIONS}\n\nNotes:\n{note_text}\n\nQuiz:\n{quiz}\n\nAnswers:\n"
    ))
}
