use serde::Deserialize;

use crate::models::{domain::NoteId, serde_helpers::null_as_empty};

// Text fields accept a missing key or an explicit `null` as blank, so the
// service answers them with its usual placeholder.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,

    #[serde(default, rename = "noteText", deserialize_with = "null_as_empty")]
    pub note_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default, rename = "noteText", deserialize_with = "null_as_empty")]
    pub note_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizAnswerRequest {
    #[serde(default, rename = "noteText", deserialize_with = "null_as_empty")]
    pub note_text: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub quiz: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveNoteRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteNoteRequest {
    #[serde(default)]
    pub id: Option<NoteId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults_missing_fields() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(request.message, "hi");
        assert_eq!(request.note_text, "");

        let empty: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, "");
    }

    #[test]
    fn test_null_fields_read_as_blank() {
        let chat: ChatRequest =
            serde_json::from_str(r#"{"message":null,"noteText":null}"#).unwrap();
        assert_eq!(chat.message, "");
        assert_eq!(chat.note_text, "");

        let answers: QuizAnswerRequest =
            serde_json::from_str(r#"{"noteText":"n","quiz":null}"#).unwrap();
        assert_eq!(answers.quiz, "");

        let save: SaveNoteRequest =
            serde_json::from_str(r#"{"title":null,"text":"Paging"}"#).unwrap();
        assert_eq!(save.title, "");
        assert_eq!(save.text, "Paging");
    }

    #[test]
    fn test_camel_case_note_text() {
        let request: QuizAnswerRequest =
            serde_json::from_str(r#"{"noteText":"n","quiz":"1. q"}"#).unwrap();
        assert_eq!(request.note_text, "n");
        assert_eq!(request.quiz, "1. q");
    }

    #[test]
    fn test_delete_request_id_is_optional() {
        let missing: DeleteNoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.id, None);

        let null: DeleteNoteRequest = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(null.id, None);

        let request: DeleteNoteRequest = serde_json::from_str(r#"{"id":12}"#).unwrap();
        assert_eq!(request.id, Some(NoteId::Int(12)));
    }
}
