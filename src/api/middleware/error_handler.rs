//! Converts `AppError` into HTTP responses.
//!
//! JSON endpoints get an [`ErrorResponse`] body, dashboard pages get a small
//! HTML page through [`PageError`]. Both share the same status mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Maps an AppError variant to its HTTP status code.
///
/// Store failures are reported as gateway errors: the dashboard itself is
/// healthy, the remote database is not.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::Connectivity { .. } => StatusCode::BAD_GATEWAY,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Render { .. }
        | AppError::Configuration { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::Connectivity { .. } => "CONNECTIVITY_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Render { .. } => "RENDER_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Message safe to show to a client. Sources are only logged.
fn public_message(error: &AppError) -> String {
    match error {
        AppError::Connectivity { operation, .. } => {
            format!("Could not reach the inventory database ({})", operation)
        }
        AppError::ConnectionPool { .. } => "Database connection unavailable".to_string(),
        AppError::BadRequest { message } => message.clone(),
        AppError::Render { .. } => "The page could not be rendered".to_string(),
        AppError::Configuration { key, .. } => format!("Configuration error: {}", key),
        AppError::Internal { .. } => "An internal error occurred".to_string(),
    }
}

fn log_error(error: &AppError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!(error = ?error, status = status.as_u16(), "Request failed");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "Request rejected");
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        log_error(&self, status);

        let body = match &self {
            AppError::Connectivity { operation, .. } => {
                ErrorResponse::new(error_to_code(&self), &public_message(&self))
                    .with_details(json!({ "operation": operation }))
            }
            _ => ErrorResponse::new(error_to_code(&self), &public_message(&self)),
        };

        (status, Json(body)).into_response()
    }
}

/// An `AppError` raised while serving an HTML page.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        PageError(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self.0);
        log_error(&self.0, status);

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Error</title></head>\
             <body><h1>{} {}</h1><p>{}</p><p><a href=\"/products\">Back to products</a></p></body></html>",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            tera::escape_html(&public_message(&self.0)),
        );

        (status, Html(body)).into_response()
    }
}
