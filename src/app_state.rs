use std::sync::Arc;

use crate::{
    config::{Config, NotesBackend},
    db::Database,
    errors::AppResult,
    repositories::{MongoNoteRepository, NoteRepository, SupabaseNoteRepository},
    services::{
        chat_service::ChatService,
        generation_service::{GeminiClient, GenerationClient},
        note_service::NoteService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub note_service: Arc<NoteService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the external-service clients once; they are shared read-only
    /// by every request afterwards.
    pub async fn new(config: Config) -> AppResult<Self> {
        let gemini = GeminiClient::new(&config);
        log::info!("Using generation model {}", gemini.model());

        let note_repository: Arc<dyn NoteRepository> = match &config.notes_backend {
            NotesBackend::Supabase { url, api_key } => Arc::new(SupabaseNoteRepository::new(
                url,
                api_key.clone(),
                &config.notes_table,
            )),
            NotesBackend::Mongo {
                conn_string,
                db_name,
            } => {
                let db = Database::connect(conn_string, db_name).await?;
                let repository = MongoNoteRepository::new(&db, &config.notes_table);
                repository.ensure_indexes().await?;
                Arc::new(repository)
            }
        };
        log::info!(
            "Persisting notes to {} table '{}'",
            config.notes_backend.name(),
            config.notes_table
        );

        Ok(Self::from_parts(config, Arc::new(gemini), note_repository))
    }

    /// Wires the services around already constructed clients.
    pub fn from_parts(
        config: Config,
        generator: Arc<dyn GenerationClient>,
        note_repository: Arc<dyn NoteRepository>,
    ) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(generator)),
            note_service: Arc::new(NoteService::new(note_repository)),
            config: Arc::new(config),
        }
    }
}
