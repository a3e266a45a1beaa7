#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use character_service::api::routes::character_routes;
use character_service::domain::entities::Character;
use character_service::infrastructure::persistence::InMemoryCharacterRepository;
use character_service::state::{AppState, DEFAULT_BODY_LIMIT};
use std::sync::Arc;

pub fn john() -> Character {
    Character::new(
        "John",
        "Mage",
        10,
        100,
        50,
        20,
        vec!["staff".to_string()],
        "1",
    )
}

pub fn jane() -> Character {
    Character::new(
        "Jane",
        "Warrior",
        12,
        120,
        60,
        25,
        vec!["sword".to_string()],
        "2",
    )
}

pub fn create_test_state(characters: Vec<Character>) -> AppState {
    let repository = InMemoryCharacterRepository::with_characters(characters).unwrap();
    AppState::new(Arc::new(repository), DEFAULT_BODY_LIMIT)
}

pub fn make_server(characters: Vec<Character>) -> TestServer {
    let state = create_test_state(characters);
    let app = Router::new()
        .nest("/api", character_routes(state.clone()))
        .with_state(state);
    TestServer::new(app).unwrap()
}
