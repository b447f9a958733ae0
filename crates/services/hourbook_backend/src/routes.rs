// --- File: crates/services/hourbook_backend/src/routes.rs ---

use crate::app_state::AppState;
use crate::handlers::{
    create_reservation_handler, delete_reservation_handler, health_handler,
    list_reservations_handler, unrecognized_request,
};
use axum::{routing::get, Router};

/// Creates a router containing all reservation routes.
///
/// One resource, three verbs. An unsupported method on the resource is
/// answered with 400 rather than 405, matching the service's contract
/// that any unrecognized request shape is a bad request.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/reservations",
            get(list_reservations_handler)
                .put(create_reservation_handler)
                .delete(delete_reservation_handler)
                .fallback(unrecognized_request),
        )
        .route("/health", get(health_handler))
        .with_state(state)
}
