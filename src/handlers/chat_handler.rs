use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::{
        request::{ChatRequest, QuizAnswerRequest, QuizRequest},
        response::{QuizAnswersResponse, QuizResponse, ReplyResponse},
    },
    services::http_helpers::{server_error, success_json},
};

/// Explains the student's question using their notes.
#[post("/chat/ask")]
pub async fn ask(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> HttpResponse {
    match state
        .chat_service
        .explain(&request.message, &request.note_text)
        .await
    {
        Ok(outcome) => success_json(ReplyResponse {
            reply: outcome.into_text(),
        }),
        Err(err) => server_error("reply", &err, get_request_id(&req).as_deref()),
    }
}

/// Generates a practice quiz, without answers, from the notes.
#[post("/chat/quiz")]
pub async fn quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> HttpResponse {
    match state.chat_service.generate_quiz(&request.note_text).await {
        Ok(outcome) => success_json(QuizResponse {
            quiz: outcome.into_text(),
        }),
        Err(err) => server_error("quiz", &err, get_request_id(&req).as_deref()),
    }
}

/// Produces the numbered answer key for a previously generated quiz.
#[post("/chat/quiz_answers")]
pub async fn quiz_answers(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizAnswerRequest>,
) -> HttpResponse {
    match state
        .chat_service
        .generate_quiz_answers(&request.note_text, &request.quiz)
        .await
    {
        Ok(outcome) => success_json(QuizAnswersResponse {
            answers: outcome.into_text(),
        }),
        Err(err) => server_error("answers", &err, get_request_id(&req).as_deref()),
    }
}
