pub mod chat_service;
pub mod generation_service;
pub mod http_helpers;
pub mod note_service;
pub mod outcome;
pub mod prompt_builder;
pub mod text_helpers;

pub use outcome::{Outcome, Rejection};
