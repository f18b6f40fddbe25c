use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::serde_helpers::null_as_empty;

/// Identifier assigned by the persistence service.
///
/// REST tables hand out integer keys while the document store uses UUID
/// strings, so both shapes are accepted and written back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NoteId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Int(id) => write!(f, "{}", id),
            NoteId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> Self {
        NoteId::Int(id)
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        NoteId::Text(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        NoteId::Text(id.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A note that has not been handed to the persistence service yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewNote {
    pub fn new(title: &str, content: &str) -> Self {
        NewNote {
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            created_at: Some(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_accepts_both_shapes() {
        let int_id: NoteId = serde_json::from_str("42").unwrap();
        let text_id: NoteId = serde_json::from_str("\"0b7c\"").unwrap();

        assert_eq!(int_id, NoteId::Int(42));
        assert_eq!(text_id, NoteId::Text("0b7c".to_string()));
        assert_eq!(serde_json::to_string(&int_id).unwrap(), "42");
        assert_eq!(int_id.to_string(), "42");
        assert_eq!(text_id.to_string(), "0b7c");
    }

    #[test]
    fn test_note_from_service_row() {
        let note: Note = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": null,
            "content": "Semaphores guard critical sections",
            "created_at": "2025-11-02T10:15:30.123456+00:00"
        }))
        .unwrap();

        assert_eq!(note.id, NoteId::Int(7));
        assert_eq!(note.title, "");
        assert_eq!(note.content, "Semaphores guard critical sections");
        assert!(note.created_at.is_some());
    }

    #[test]
    fn test_new_note_into_note() {
        let new_note = NewNote::new("OS", "Threads share an address space");
        let created_at = new_note.created_at;
        let note = new_note.into_note(NoteId::from("abc"));

        assert_eq!(note.title, "OS");
        assert_eq!(note.content, "Threads share an address space");
        assert_eq!(note.created_at, Some(created_at));
    }
}
