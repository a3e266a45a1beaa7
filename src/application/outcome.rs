//! Result of a character operation, independent of the transport.
//!
//! Services return an [`Outcome`]; the HTTP layer turns it into a status code
//! and JSON body through its [`IntoResponse`] implementation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::entities::Character;

pub const NOT_FOUND_MESSAGE: &str = "Character not found";
pub const CREATED_MESSAGE: &str = "Character created";
pub const UPDATED_MESSAGE: &str = "Character updated successfully";
pub const DELETED_MESSAGE: &str = "Character deleted successfully";

/// Outcome of a single controller operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success {
        status: StatusCode,
        body: ResponseBody,
    },
    NotFound {
        message: &'static str,
    },
}

/// JSON body of a successful operation.
///
/// `message` and `data` are omitted from the output when `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
}

/// Records carried in a response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    One(Character),
    Many(Vec<Character>),
}

impl Outcome {
    pub fn success(
        status: StatusCode,
        message: Option<&'static str>,
        data: Option<Payload>,
    ) -> Self {
        Self::Success {
            status,
            body: ResponseBody { message, data },
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound {
            message: NOT_FOUND_MESSAGE,
        }
    }

    /// Status code the transport should answer with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Success { status, body } => (status, Json(body)).into_response(),
            Outcome::NotFound { message } => {
                let body = ResponseBody {
                    message: Some(message),
                    data: None,
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}
