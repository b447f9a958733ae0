// --- File: crates/services/hourbook_backend/src/lib.rs ---
// Declare modules within this crate
pub mod app_state;
pub mod handlers;
pub mod routes;
