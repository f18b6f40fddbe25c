use serde::Serialize;

use crate::models::domain::Note;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: String,
}

#[derive(Debug, Serialize)]
pub struct QuizAnswersResponse {
    pub answers: String,
}

#[derive(Debug, Serialize)]
pub struct SaveNoteResponse {
    pub status: &'static str,
    pub data: Vec<Note>,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
