// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use tracing::{error, warn};

use crate::engines::traits::EngineError;
use crate::utils::errors::{ScrapeError, ValidationError};

/// 应用错误类型
///
/// 封装所有可能的应用层错误，按错误来源映射 HTTP 状态码，
/// 响应体为 `{"detail": ...}`
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(engine_error) = self.0.downcast_ref::<EngineError>() {
            return match engine_error {
                EngineError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                EngineError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            };
        }

        if let Some(scrape_error) = self.0.downcast_ref::<ScrapeError>() {
            return match scrape_error {
                ScrapeError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::NOT_FOUND,
            };
        }

        if self.0.downcast_ref::<ValidationError>().is_some() {
            return StatusCode::UNPROCESSABLE_ENTITY;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Some(validation) = self.0.downcast_ref::<ValidationError>() {
            warn!(reason = %validation.reason, "Rejected request body");
            let mut body = json!({
                "detail": "Invalid request parameters",
                "errors": [validation.reason],
            });
            if !validation.required_format.is_empty() {
                let format: Map<String, Value> = validation
                    .required_format
                    .iter()
                    .map(|(field, hint)| (field.to_string(), Value::from(*hint)))
                    .collect();
                body["required_format"] = Value::Object(format);
            }
            return (status, Json(body)).into_response();
        }

        let detail = match self.0.downcast_ref::<EngineError>() {
            Some(EngineError::InvalidCredentials) => "Invalid credentials".to_string(),
            _ => self.0.to_string(),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
