// File: crates/services/hourbook_backend/src/main.rs
use axum::Router;
use hourbook_backend::app_state::AppState;
use hourbook_backend::handlers::unrecognized_request;
use hourbook_backend::routes;
use hourbook_config::load_config;
use hourbook_db::{DbClient, SqlReservationStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    hourbook_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    let db_client = DbClient::new(&config)
        .await
        .expect("Failed to connect to database");
    let store = SqlReservationStore::new(db_client);
    store
        .init_schema()
        .await
        .expect("Failed to initialize reservations schema");

    let state = AppState {
        config: config.clone(),
        store: Arc::new(store),
    };

    let app = Router::new()
        .nest("/api", routes::routes(state))
        .fallback(unrecognized_request)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
