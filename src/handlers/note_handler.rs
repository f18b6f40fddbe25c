use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::{json, Map};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::{
        request::{DeleteNoteRequest, SaveNoteRequest},
        response::{NotesResponse, SaveNoteResponse, StatusResponse},
    },
    services::{
        http_helpers::{server_error, server_error_with, success_json},
        Outcome,
    },
};

#[post("/notes/save")]
pub async fn save_note(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SaveNoteRequest>,
) -> HttpResponse {
    match state
        .note_service
        .save_note(&request.title, &request.text)
        .await
    {
        Ok(Outcome::Completed(data)) => success_json(SaveNoteResponse {
            status: "saved",
            data,
        }),
        Ok(Outcome::Rejected(rejection)) => success_json(StatusResponse::new(rejection.message())),
        Err(err) => server_error("status", &err, get_request_id(&req).as_deref()),
    }
}

/// Lists every note, newest first.
#[get("/notes/get")]
pub async fn get_notes(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    match state.note_service.list_notes().await {
        Ok(notes) => success_json(NotesResponse { notes }),
        Err(err) => {
            let mut body = Map::new();
            body.insert("notes".to_string(), json!([]));
            server_error_with("status", &err, get_request_id(&req).as_deref(), body)
        }
    }
}

#[post("/notes/delete")]
pub async fn delete_note(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<DeleteNoteRequest>,
) -> HttpResponse {
    match state.note_service.delete_note(request.id.as_ref()).await {
        Ok(Outcome::Completed(())) => success_json(StatusResponse::new("deleted")),
        Ok(Outcome::Rejected(rejection)) => success_json(StatusResponse::new(rejection.message())),
        Err(err) => server_error("status", &err, get_request_id(&req).as_deref()),
    }
}
