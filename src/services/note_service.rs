use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{NewNote, Note, NoteId},
    repositories::NoteRepository,
    services::{
        outcome::{Outcome, Rejection},
        text_helpers::is_blank,
    },
};

pub struct NoteService {
    repository: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }

    /// Stores a note unless its content is blank. The title may be empty.
    pub async fn save_note(&self, title: &str, content: &str) -> AppResult<Outcome<Vec<Note>>> {
        if is_blank(content) {
            return Ok(Outcome::Rejected(Rejection::EmptyNote));
        }

        let inserted = self.repository.insert(NewNote::new(title, content)).await?;
        log::info!("Saved note ({} bytes)", content.len());
        Ok(Outcome::Completed(inserted))
    }

    pub async fn list_notes(&self) -> AppResult<Vec<Note>> {
        self.repository.list_newest_first().await
    }

    /// Existence is not checked: deleting an unknown id succeeds. A missing
    /// or blank id is turned away without touching the repository.
    pub async fn delete_note(&self, id: Option<&NoteId>) -> AppResult<Outcome<()>> {
        let id = match id {
            Some(NoteId::Text(text)) if is_blank(text) => None,
            other => other,
        };
        let Some(id) = id else {
            return Ok(Outcome::Rejected(Rejection::MissingNoteId));
        };

        self.repository.delete(id).await?;
        log::info!("Deleted note {}", id);
        Ok(Outcome::Completed(()))
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.health_check().await
    }
}
