use async_trait::async_trait;
use reqwest::{header, Client, Request, RequestBuilder, Response};
use secrecy::{ExposeSecret as _, SecretString};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{NewNote, Note, NoteId},
    repositories::NoteRepository,
};

/// Notes table behind a Supabase (PostgREST) endpoint.
pub struct SupabaseNoteRepository {
    http: Client,
    table_url: String,
    api_key: SecretString,
}

impl SupabaseNoteRepository {
    pub fn new(base_url: &str, api_key: SecretString, table: &str) -> Self {
        Self {
            http: Client::new(),
            table_url: table_url(base_url, table),
            api_key,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        request
            .header("apikey", key)
            .header(header::AUTHORIZATION, format!("Bearer {}", key))
    }

    fn insert_request(&self, note: &NewNote) -> reqwest::Result<Request> {
        self.authorized(self.http.post(&self.table_url))
            .header("Prefer", "return=representation")
            .json(note)
            .build()
    }

    fn list_request(&self) -> reqwest::Result<Request> {
        self.authorized(self.http.get(&self.table_url))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .build()
    }

    fn delete_request(&self, id: &NoteId) -> reqwest::Result<Request> {
        self.authorized(self.http.delete(&self.table_url))
            .query(&[("id", id_filter(id))])
            .build()
    }

    fn health_request(&self) -> reqwest::Result<Request> {
        self.authorized(self.http.get(&self.table_url))
            .query(&[("select", "id"), ("limit", "1")])
            .build()
    }

    async fn send(&self, request: Request, action: &str) -> AppResult<Response> {
        let response = self.http.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read response body".to_string());
        log::error!("Supabase {} failed with {}: {}", action, status, body);
        Err(AppError::DatabaseError(format!(
            "{} failed with status {}: {}",
            action, status, body
        )))
    }
}

pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

pub fn id_filter(id: &NoteId) -> String {
    format!("eq.{}", id)
}

#[async_trait]
impl NoteRepository for SupabaseNoteRepository {
    async fn insert(&self, note: NewNote) -> AppResult<Vec<Note>> {
        let request = self.insert_request(&note)?;
        let inserted = self
            .send(request, "insert")
            .await?
            .json::<Vec<Note>>()
            .await?;
        Ok(inserted)
    }

    async fn list_newest_first(&self) -> AppResult<Vec<Note>> {
        let request = self.list_request()?;
        let notes = self
            .send(request, "select")
            .await?
            .json::<Vec<Note>>()
            .await?;
        Ok(notes)
    }

    async fn delete(&self, id: &NoteId) -> AppResult<()> {
        let request = self.delete_request(id)?;
        self.send(request, "delete").await?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        let request = self.health_request()?;
        self.send(request, "health check").await?;
        Ok(())
    }
}
