use actix_web::HttpResponse;
use serde_json::{json, Map, Value};

use crate::{constants::prompts::SERVER_ERROR_MESSAGE, errors::AppError};

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}

/// Logs the failure and answers 500 with `{<field>: "Server error", code}`.
pub fn server_error(field: &str, err: &AppError, request_id: Option<&str>) -> HttpResponse {
    server_error_with(field, err, request_id, Map::new())
}

/// Like [`server_error`], with extra fields merged into the body.
pub fn server_error_with(
    field: &str,
    err: &AppError,
    request_id: Option<&str>,
    mut body: Map<String, Value>,
) -> HttpResponse {
    log::error!(
        "[{}] {} request failed: {}",
        request_id.unwrap_or("-"),
        field,
        err
    );

    body.insert(field.to_string(), json!(SERVER_ERROR_MESSAGE));
    body.insert("code".to_string(), json!(err.error_code()));
    HttpResponse::InternalServerError().json(Value::Object(body))
}
