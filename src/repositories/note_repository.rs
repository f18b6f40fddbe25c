use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::domain::{NewNote, Note, NoteId},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Inserts the note and returns the stored representation.
    async fn insert(&self, note: NewNote) -> AppResult<Vec<Note>>;
    /// All notes, most recently created first.
    async fn list_newest_first(&self) -> AppResult<Vec<Note>>;
    /// Deletes by id. Unknown ids are not an error.
    async fn delete(&self, id: &NoteId) -> AppResult<()>;
    async fn health_check(&self) -> AppResult<()>;
}
