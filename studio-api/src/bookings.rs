use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use studio_catalog::schedule;
use studio_store::{AdmittedBooking, BookingRecord};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub class_id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub class_id: i64,
    pub class_name: String,
    pub name: String,
    pub email: String,
    pub booked_at: DateTime<Utc>,
    pub available_slots: u32,
}

#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub email: Option<String>,
    pub tz: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingListEntry {
    pub booking_id: Uuid,
    pub class_id: i64,
    pub class_name: String,
    pub class_start_time: String,
    pub name: String,
    pub email: String,
    pub booked_at: DateTime<Utc>,
}

impl BookingListEntry {
    fn new(record: &BookingRecord, zone: Option<Tz>) -> Self {
        Self {
            booking_id: record.booking.id,
            class_id: record.booking.class_id,
            class_name: record.session.name.clone(),
            class_start_time: schedule::format_in_zone(record.session.start_time, zone),
            name: record.booking.attendee_name.clone(),
            email: record.booking.attendee_email.clone(),
            booked_at: record.booking.booked_at,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/book", post(book_class))
        .route("/bookings", get(list_bookings))
}

/// POST /book
/// Admit a booking request; 404 unknown class, 409 full or duplicate
async fn book_class(
    State(state): State<AppState>,
    Json(req): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let AdmittedBooking {
        booking,
        session,
        available_slots,
    } = state
        .store
        .attempt_booking(req.class_id, &req.name, &req.email)
        .await?;

    info!("Booking admitted: {} for class {}", booking.id, booking.class_id);

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            booking_id: booking.id,
            class_id: booking.class_id,
            class_name: session.name,
            name: booking.attendee_name,
            email: booking.attendee_email,
            booked_at: booking.booked_at,
            available_slots,
        }),
    ))
}

/// GET /bookings?email=<email>&tz=<zone>
/// All bookings for an attendee, insertion order preserved
async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingListEntry>>, AppError> {
    let email = query
        .email
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("email query parameter is required".to_string()))?;

    let zone = query
        .tz
        .as_deref()
        .map(schedule::parse_zone)
        .transpose()?;

    let entries = state
        .store
        .bookings_by_email(email)
        .await
        .iter()
        .map(|record| BookingListEntry::new(record, zone))
        .collect();

    Ok(Json(entries))
}
