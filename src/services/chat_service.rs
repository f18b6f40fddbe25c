use std::sync::Arc;

use crate::{
    constants::prompts::{NO_ANSWERS_FALLBACK, NO_QUIZ_FALLBACK, NO_RESPONSE_FALLBACK},
    errors::AppResult,
    services::{
        generation_service::GenerationClient,
        outcome::{Outcome, Rejection},
        prompt_builder::{build_explanation_prompt, build_quiz_answer_prompt, build_quiz_prompt},
        text_helpers::is_blank,
    },
};

pub struct ChatService {
    generator: Arc<dyn GenerationClient>,
}

impl ChatService {
    pub fn new(generator: Arc<dyn GenerationClient>) -> Self {
        Self { generator }
    }

    /// Topic-structured explanation of `message` in the light of `note_text`.
    pub async fn explain(&self, message: &str, note_text: &str) -> AppResult<Outcome<String>> {
        // Only a truly empty message is rejected; whitespace is still forwarded.
        if message.is_empty() {
            return Ok(Outcome::Rejected(Rejection::EmptyMessage));
        }

        let prompt = build_explanation_prompt(message, note_text);
        self.complete(&prompt, NO_RESPONSE_FALLBACK).await
    }

    pub async fn generate_quiz(&self, note_text: &str) -> AppResult<Outcome<String>> {
        match build_quiz_prompt(note_text) {
            Ok(prompt) => self.complete(&prompt, NO_QUIZ_FALLBACK).await,
            Err(rejection) => Ok(Outcome::Rejected(rejection)),
        }
    }

    pub async fn generate_quiz_answers(
        &self,
        note_text: &str,
        quiz: &str,
    ) -> AppResult<Outcome<String>> {
        match build_quiz_answer_prompt(note_text, quiz) {
            Ok(prompt) => self.complete(&prompt, NO_ANSWERS_FALLBACK).await,
            Err(rejection) => Ok(Outcome::Rejected(rejection)),
        }
    }

    async fn complete(&self, prompt: &str, fallback: &str) -> AppResult<Outcome<String>> {
        let text = self
            .generator
            .generate(prompt)
            .await?
            .filter(|text| !is_blank(text))
            .unwrap_or_else(|| fallback.to_string());

        Ok(Outcome::Completed(text))
    }
}
