pub mod chat_handler;
pub mod health_handler;
pub mod note_handler;

use actix_web::web;

use crate::errors::AppError;

pub use chat_handler::{ask, quiz, quiz_answers};
pub use health_handler::{health_check_live, health_check_ready, home};
pub use note_handler::{delete_note, get_notes, save_note};

/// Registers every route. A body that cannot be read as JSON is answered
/// with the generic 500.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| {
        log::error!("Unreadable request body on {}: {}", req.path(), err);
        AppError::RequestBodyError(err.to_string()).into()
    }))
    .service(home)
    .service(health_check_live)
    .service(health_check_ready)
    .service(ask)
    .service(quiz)
    .service(quiz_answers)
    .service(save_note)
    .service(get_notes)
    .service(delete_note);
}
