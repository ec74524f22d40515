use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use studio_catalog::schedule;
use studio_store::ClassAvailability;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListClassesQuery {
    pub tz: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time: String,
    pub capacity: u32,
    pub available_slots: u32,
}

impl ClassResponse {
    fn new(availability: &ClassAvailability, zone: Option<Tz>) -> Self {
        let session = &availability.session;
        Self {
            id: session.id,
            name: session.name.clone(),
            instructor: session.instructor.clone(),
            start_time: schedule::format_in_zone(session.start_time, zone),
            capacity: session.capacity,
            available_slots: availability.available_slots(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/classes", get(list_classes))
}

/// GET /classes?tz=<zone>
/// List sessions ordered by start time, rendered in the requested zone
async fn list_classes(
    State(state): State<AppState>,
    Query(query): Query<ListClassesQuery>,
) -> Result<Json<Vec<ClassResponse>>, AppError> {
    let zone = query
        .tz
        .as_deref()
        .map(schedule::parse_zone)
        .transpose()?;

    let classes = state
        .store
        .list_classes()
        .await
        .iter()
        .map(|availability| ClassResponse::new(availability, zone))
        .collect();

    Ok(Json(classes))
}
