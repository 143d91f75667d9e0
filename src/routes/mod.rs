use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod health;
pub mod questions;
pub mod teams;
pub mod websocket;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(teams::router())
        .merge(game::router())
        .merge(questions::router())
        .merge(websocket::router())
        .merge(docs::router())
        .with_state(state)
}
