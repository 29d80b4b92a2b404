pub mod log;
pub mod webhook;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{BookingRequest, BookingStatus, DoctorRecord, ScheduleWindow};

/// Downstream booking subsystem. The appointment page only hands requests off.
#[async_trait]
pub trait BookingProvider: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> anyhow::Result<BookingStatus>;
}

/// Turn the page's current selection into a request, checking it against
/// the schedule the page was rendered from.
pub fn prepare_booking(
    doctor: &DoctorRecord,
    schedule: &ScheduleWindow,
    day: usize,
    time: Option<&str>,
    now: NaiveDateTime,
) -> Result<BookingRequest, AppError> {
    let time = time
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Please select a time slot".to_string()))?;

    let slots = schedule.day(day).ok_or_else(|| {
        AppError::BadRequest(format!(
            "day index {day} is outside the {}-day window",
            schedule.len()
        ))
    })?;

    let slot = slots.find(time).ok_or_else(|| {
        AppError::BadRequest(format!("{time} is not available on {}", slots.date))
    })?;

    Ok(BookingRequest {
        id: Uuid::new_v4(),
        doctor_id: doctor.id.clone(),
        date: slots.date,
        time: slot.time.clone(),
        datetime: slot.datetime,
        requested_at: now,
    })
}
