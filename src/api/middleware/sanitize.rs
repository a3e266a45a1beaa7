//! Input sanitization middleware for character create and update routes.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::SanitizedInput;
use crate::state::AppState;

/// Attaches a [`SanitizedInput`] to the request and runs the next handler.
///
/// # Flow
///
/// 1. Buffer the body, up to [`AppState::body_limit`] bytes
/// 2. Copy the allow-listed, present fields into a [`SanitizedInput`]
/// 3. Store it in the request extensions
/// 4. Rebuild the request with the original body and continue
///
/// The middleware never short-circuits. An unreadable, oversized or non-object
/// body yields an empty [`SanitizedInput`].
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Extension, handler::Handler, middleware, routing::post};
///
/// async fn create(Extension(input): Extension<SanitizedInput>) { /* ... */ }
///
/// let route = post(create.layer(middleware::from_fn_with_state(state, sanitize::layer)));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let bytes = match to_bytes(body, st.body_limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(
                error = %e,
                limit = st.body_limit,
                "Unreadable request body, sanitizing an empty payload"
            );
            Bytes::new()
        }
    };

    let sanitized = sanitize_body(&bytes);
    debug!(fields = sanitized.len(), "Sanitized character input");
    parts.extensions.insert(sanitized);

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Parses a raw request body and sanitizes it.
///
/// An empty or malformed body carries no fields.
pub fn sanitize_body(bytes: &[u8]) -> SanitizedInput {
    if bytes.is_empty() {
        return SanitizedInput::default();
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(payload) => SanitizedInput::from_payload(&payload),
        Err(e) => {
            debug!(error = %e, "Request body is not JSON");
            SanitizedInput::default()
        }
    }
}
