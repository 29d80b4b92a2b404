use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Selection;
use crate::services::profile::resolve_profile;
use crate::services::render::{render_empty_page, render_page};
use crate::services::slots::generate_schedule;
use crate::services::view::{build_view, AppointmentView};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub day: Option<usize>,
    pub time: Option<String>,
}

/// Resolve the doctor and build the page model. `None` when the doctor is not
/// in the directory, in which case no schedule is generated.
pub fn load_view(
    state: &AppState,
    doc_id: &str,
    query: &PageQuery,
) -> Result<Option<AppointmentView>, AppError> {
    let directory = state.directory.snapshot();
    let Some(doctor) = resolve_profile(&directory, doc_id) else {
        tracing::debug!(doc_id = %doc_id, loaded = directory.len(), "no matching doctor");
        return Ok(None);
    };

    let schedule = generate_schedule(state.clock.now(), &state.config.slot_policy);

    let mut selection = Selection::default();
    if let Some(day) = query.day {
        selection.select_day(day, schedule.len())?;
    }
    if let Some(time) = query.time.as_deref().filter(|t| !t.trim().is_empty()) {
        selection.select_time(time);
    }

    Ok(Some(build_view(
        doctor,
        &schedule,
        &selection,
        &state.config.currency_symbol,
        &directory,
    )))
}

// GET /appointment/:doc_id
pub async fn appointment_page(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let html = match load_view(&state, &doc_id, &query)? {
        Some(view) => render_page(&view),
        None => render_empty_page(),
    };
    Ok(Html(html))
}

// GET /api/appointment/:doc_id
pub async fn appointment_json(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<AppointmentView>, AppError> {
    load_view(&state, &doc_id, &query)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("doctor {doc_id}")))
}
