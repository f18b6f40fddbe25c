#[cfg(test)]
pub mod fixtures {
    use chrono::{Duration, Utc};

    use crate::models::domain::{Note, NoteId};

    /// Creates a stored note with the given id and content
    pub fn test_note(id: i64, content: &str) -> Note {
        Note {
            id: NoteId::Int(id),
            title: format!("Note {}", id),
            content: content.to_string(),
            created_at: Some(Utc::now() - Duration::minutes(id)),
        }
    }

    pub const SAMPLE_NOTES: &str =
        "A process is a program in execution. Each process has a PCB holding its state.";
}

#[cfg(test)]
pub mod fakes {
    use std::sync::{
        atomic::{AtomicI64, AtomicUsize, Ordering},
        Mutex,
    };

    use async_trait::async_trait;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::{NewNote, Note, NoteId},
        repositories::NoteRepository,
        services::generation_service::GenerationClient,
    };

    /// Generation double returning a fixed reply and counting calls.
    pub struct StaticGenerationClient {
        reply: Result<Option<String>, AppError>,
        calls: AtomicUsize,
    }

    impl StaticGenerationClient {
        pub fn replying(text: &str) -> Self {
            Self::with(Ok(Some(text.to_string())))
        }

        pub fn silent() -> Self {
            Self::with(Ok(None))
        }

        pub fn failing() -> Self {
            Self::with(Err(AppError::GenerationError(
                "generation service unavailable".to_string(),
            )))
        }

        fn with(reply: Result<Option<String>, AppError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationClient for StaticGenerationClient {
        async fn generate(&self, _prompt: &str) -> AppResult<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    /// Note store kept in memory, with an optional failure switch.
    #[derive(Default)]
    pub struct InMemoryNoteRepository {
        notes: Mutex<Vec<Note>>,
        next_id: AtomicI64,
        failing: bool,
    }

    impl InMemoryNoteRepository {
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn len(&self) -> usize {
            self.notes.lock().unwrap().len()
        }

        fn check(&self) -> AppResult<()> {
            if self.failing {
                return Err(AppError::DatabaseError("notes table unavailable".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl NoteRepository for InMemoryNoteRepository {
        async fn insert(&self, note: NewNote) -> AppResult<Vec<Note>> {
            self.check()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let note = note.into_note(NoteId::Int(id));
            self.notes.lock().unwrap().push(note.clone());
            Ok(vec![note])
        }

        async fn list_newest_first(&self) -> AppResult<Vec<Note>> {
            self.check()?;
            let mut notes = self.notes.lock().unwrap().clone();
            notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(notes)
        }

        async fn delete(&self, id: &NoteId) -> AppResult<()> {
            self.check()?;
            self.notes.lock().unwrap().retain(|note| &note.id != id);
            Ok(())
        }

        async fn health_check(&self) -> AppResult<()> {
            self.check()
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::fixtures::*;
    use crate::{models::domain::NewNote, repositories::NoteRepository};

    #[test]
    fn test_fixture_note() {
        let note = test_note(3, "Deadlock");
        assert_eq!(note.title, "Note 3");
        assert_eq!(note.content, "Deadlock");
    }

    #[actix_web::test]
    async fn test_in_memory_repository_orders_newest_first() {
        let repository = InMemoryNoteRepository::default();
        let mut older = NewNote::new("", "first");
        older.created_at = older.created_at - chrono::Duration::seconds(5);

        repository.insert(older).await.unwrap();
        repository.insert(NewNote::new("", "second")).await.unwrap();

        let notes = repository.list_newest_first().await.unwrap();
        assert_eq!(notes[0].content, "second");
        assert_eq!(notes[1].content, "first");
        assert_eq!(repository.len(), 2);
    }
}
