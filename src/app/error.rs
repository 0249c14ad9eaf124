use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::headers::CORS_HEADERS;
use crate::avatar::AvatarError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Style not found")]
    UnknownStyle(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Not found")]
    NotFound,

    /// Listing failures, answered as JSON with CORS headers.
    #[error("{message}")]
    Catalog {
        code: &'static str,
        message: &'static str,
    },

    #[error("an internal server error occurred")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl From<AvatarError> for AppError {
    fn from(err: AvatarError) -> Self {
        match err {
            AvatarError::UnknownStyle(style) => Self::UnknownStyle(style),
            AvatarError::InvalidArgument(message) => Self::InvalidArgument(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Catalog { code, message } => {
                return (
                    StatusCode::NOT_FOUND,
                    CORS_HEADERS,
                    Json(ErrorResponse {
                        error: ErrorDetail {
                            code: code.into(),
                            message: message.into(),
                        },
                    }),
                )
                    .into_response();
            }

            Self::UnknownStyle(ref style) => {
                tracing::info!(style = %style, "unknown style requested");
            }

            Self::Anyhow(ref e) => {
                tracing::error!("Internal server error: {:?}", e)
            }

            _ => (),
        }

        (self.status_code(), self.to_string()).into_response()
    }
}

impl AppError {
    pub fn catalog_not_found(message: &'static str) -> Self {
        Self::Catalog {
            code: "not_found",
            message,
        }
    }

    pub fn invalid_category(message: &'static str) -> Self {
        Self::Catalog {
            code: "invalid_category",
            message,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownStyle(_) => StatusCode::NOT_FOUND,
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Catalog { .. } => StatusCode::NOT_FOUND,
            Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
