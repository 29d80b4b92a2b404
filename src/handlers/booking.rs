use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingRequest, BookingStatus};
use crate::services::booking::prepare_booking;
use crate::services::profile::resolve_profile;
use crate::services::render::{render_booking_error, render_confirmation};
use crate::services::slots::generate_schedule;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub day: usize,
    pub time: Option<String>,
}

#[derive(Serialize)]
pub struct BookResponse {
    booking_id: String,
    status: String,
    doctor_id: String,
    date: String,
    time: String,
}

async fn submit_booking(
    state: &AppState,
    doc_id: &str,
    payload: &BookPayload,
) -> Result<(BookingRequest, BookingStatus), AppError> {
    let request = {
        let directory = state.directory.snapshot();
        let doctor = resolve_profile(&directory, doc_id)
            .ok_or_else(|| AppError::NotFound(format!("doctor {doc_id}")))?;
        let now = state.clock.now();
        let schedule = generate_schedule(now, &state.config.slot_policy);
        prepare_booking(doctor, &schedule, payload.day, payload.time.as_deref(), now)?
    };

    let status = state.booking.submit(&request).await.map_err(|e| {
        tracing::error!(error = %e, doc_id = %doc_id, "booking submission failed");
        AppError::Booking(e.to_string())
    })?;

    Ok((request, status))
}

// POST /api/appointment/:doc_id/book
pub async fn book_json(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let (request, status) = submit_booking(&state, &doc_id, &payload).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(BookResponse {
            booking_id: request.id.to_string(),
            status: status.as_str().to_string(),
            doctor_id: request.doctor_id,
            date: request.date.format("%Y-%m-%d").to_string(),
            time: request.time,
        }),
    ))
}

// POST /appointment/:doc_id/book
pub async fn book_form(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
    Form(payload): Form<BookPayload>,
) -> (StatusCode, Html<String>) {
    match submit_booking(&state, &doc_id, &payload).await {
        Ok((request, _)) => (StatusCode::ACCEPTED, Html(render_confirmation(&request))),
        Err(e) => {
            tracing::debug!(error = %e, doc_id = %doc_id, "form booking rejected");
            (
                e.status_code(),
                Html(render_booking_error(&doc_id, payload.day, &e.detail())),
            )
        }
    }
}
