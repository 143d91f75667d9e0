/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Match pairing between teams that have not played yet.
pub mod match_service;
/// Question draws from the bank.
pub mod question_service;
/// Periodic roster snapshots pushed to websocket subscribers.
pub mod roster_broadcast;
/// Roster listing, registration and status transitions.
pub mod roster_service;
/// Round score updates.
pub mod score_service;
/// WebSocket connection handling for roster subscribers.
pub mod websocket_service;
