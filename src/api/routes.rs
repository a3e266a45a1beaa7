//! API route configuration.

use crate::api::handlers::{
    create_character_handler, delete_character_handler, get_character_handler,
    list_characters_handler, update_character_handler,
};
use crate::api::middleware::sanitize;
use crate::state::AppState;
use axum::{Router, handler::Handler, middleware, routing::get};

/// Character routes.
///
/// Create and update run behind [`sanitize::layer`], which needs `state` to
/// know the body size limit.
///
/// # Endpoints
///
/// - `GET    /characters`       - List all characters
/// - `POST   /characters`       - Create a character
/// - `GET    /characters/{id}`  - Fetch one character
/// - `PATCH  /characters/{id}`  - Partially update a character
/// - `PUT    /characters/{id}`  - Same as `PATCH`
/// - `DELETE /characters/{id}`  - Delete a character
pub fn character_routes(state: AppState) -> Router<AppState> {
    let sanitizer = middleware::from_fn_with_state(state, sanitize::layer);

    Router::new()
        .route(
            "/characters",
            get(list_characters_handler).post(create_character_handler.layer(sanitizer.clone())),
        )
        .route(
            "/characters/{id}",
            get(get_character_handler)
                .patch(update_character_handler.layer(sanitizer.clone()))
                .put(update_character_handler.layer(sanitizer))
                .delete(delete_character_handler),
        )
}
