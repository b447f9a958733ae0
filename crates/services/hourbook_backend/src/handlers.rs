// File: crates/services/hourbook_backend/src/handlers.rs
//! HTTP handlers: thin glue between the transport and the store.
//!
//! All input normalization happens here — the store only ever sees
//! canonical whole-hour timestamps. Store outcomes map to statuses via
//! [`HttpStatusCode`]: conflicts become 409, invalid arguments 400,
//! storage failures 500.

use crate::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};
use hourbook_common::HttpStatusCode;
use hourbook_db::{Reservation, StoreError, TIME_FORMAT};
use serde::Deserialize;
use tracing::info;

/// Body shape shared by the create and delete endpoints.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    /// Raw timestamp in `YYYY-MM-DDTHH:mm:ss`; minutes and seconds are
    /// ignored and zeroed before the store is called.
    pub start_time: String,
    /// Name of the user making (or cancelling) the reservation.
    pub user_name: String,
}

/// Optional listing window; both bounds or neither.
#[derive(Deserialize, Debug, Default)]
pub struct ScanQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

fn bad_timestamp(raw: &str) -> (StatusCode, String) {
    (
        StatusCode::BAD_REQUEST,
        format!("Bad request: invalid timestamp ({raw})"),
    )
}

/// Parse a raw timestamp and force it onto its whole hour.
fn normalize_slot_start(raw: &str) -> Result<String, (StatusCode, String)> {
    let parsed = NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| bad_timestamp(raw))?;
    let slot = parsed
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .ok_or_else(|| bad_timestamp(raw))?;
    Ok(slot.format(TIME_FORMAT).to_string())
}

/// Validate a scan bound without altering it.
fn validate_bound(raw: &str) -> Result<(), (StatusCode, String)> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| bad_timestamp(raw))?;
    Ok(())
}

/// The listing window used when the caller gives no bounds: the current
/// hour up to the start of the ISO week `weeks` weeks past the next one.
pub(crate) fn default_scan_window(now: NaiveDateTime, weeks: u32) -> (String, String) {
    let start = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    let days_to_next_monday = 7 - i64::from(now.weekday().num_days_from_monday());
    let end_date = now.date() + Duration::days(days_to_next_monday + i64::from(weeks) * 7);
    let end = end_date.and_time(NaiveTime::MIN);

    (
        start.format(TIME_FORMAT).to_string(),
        end.format(TIME_FORMAT).to_string(),
    )
}

fn store_error_response(err: StoreError) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

/// Handler to list reservations in a window.
pub async fn list_reservations_handler(
    State(state): State<AppState>,
    Query(query): Query<ScanQuery>,
) -> Result<Json<Vec<Reservation>>, (StatusCode, String)> {
    let (start, end) = match (query.start, query.end) {
        (Some(start), Some(end)) => {
            validate_bound(&start)?;
            validate_bound(&end)?;
            (start, end)
        }
        (None, None) => default_scan_window(
            chrono::Utc::now().naive_utc(),
            state.config.booking.scan_weeks,
        ),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "Bad request: start and end must be given together".to_string(),
            ));
        }
    };

    let reservations = state
        .store
        .scan(&start, &end)
        .await
        .map_err(store_error_response)?;
    Ok(Json(reservations))
}

/// Handler to reserve a slot.
pub async fn create_reservation_handler(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let slot = normalize_slot_start(&request.start_time)?;
    let reservation = Reservation::new(slot, request.user_name);

    state
        .store
        .create(reservation.clone())
        .await
        .map_err(store_error_response)?;

    info!(slot = reservation.start_time(), "slot reserved");
    Ok(StatusCode::OK)
}

/// Handler to cancel a reservation; only the stored owner may do so.
pub async fn delete_reservation_handler(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let slot = normalize_slot_start(&request.start_time)?;
    let reservation = Reservation::new(slot, request.user_name);

    state
        .store
        .delete(reservation.clone())
        .await
        .map_err(store_error_response)?;

    info!(slot = reservation.start_time(), "reservation cancelled");
    Ok(StatusCode::OK)
}

/// Handler reporting store reachability.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    state.store.ping().await.map_err(store_error_response)?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// Fallback for anything the router does not recognize.
pub async fn unrecognized_request() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "Bad request")
}
