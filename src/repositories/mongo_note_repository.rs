use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{NewNote, Note, NoteId},
    repositories::NoteRepository,
};

/// Stored shape of a note. `created_at` is a native BSON date so the
/// collection sorts chronologically.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NoteDocument {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
    pub created_at: bson::DateTime,
}

impl NoteDocument {
    pub fn from_new_note(note: NewNote) -> Self {
        NoteDocument {
            id: Uuid::new_v4().to_string(),
            title: note.title,
            content: note.content,
            created_at: bson::DateTime::from_millis(note.created_at.timestamp_millis()),
        }
    }
}

impl From<NoteDocument> for Note {
    fn from(document: NoteDocument) -> Self {
        Note {
            id: NoteId::Text(document.id),
            title: document.title,
            content: document.content,
            created_at: DateTime::<Utc>::from_timestamp_millis(document.created_at.timestamp_millis()),
        }
    }
}

/// Sort order for listing notes, newest first.
pub fn newest_first_sort() -> Document {
    doc! { "created_at": -1 }
}

/// Ids are stored as strings, so integer ids are matched by their text form.
pub fn id_filter(id: &NoteId) -> Document {
    doc! { "id": id.to_string() }
}

pub struct MongoNoteRepository {
    db: Database,
    collection: Collection<NoteDocument>,
}

impl MongoNoteRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for notes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        let created_at_index = IndexModel::builder()
            .keys(newest_first_sort())
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(created_at_index).await?;

        log::info!("Successfully created indexes for notes collection");
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MongoNoteRepository {
    async fn insert(&self, note: NewNote) -> AppResult<Vec<Note>> {
        let document = NoteDocument::from_new_note(note);
        self.collection.insert_one(&document).await?;
        Ok(vec![document.into()])
    }

    async fn list_newest_first(&self) -> AppResult<Vec<Note>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(newest_first_sort())
            .await?;
        let documents: Vec<NoteDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Note::from).collect())
    }

    async fn delete(&self, id: &NoteId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await?;

        if result.deleted_count == 0 {
            log::debug!("Delete matched no note with id {}", id);
        }
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
