use async_trait::async_trait;

use super::BookingProvider;
use crate::models::{BookingRequest, BookingStatus};

/// Accepts every request and records it in the log.
pub struct LoggingBookingProvider;

#[async_trait]
impl BookingProvider for LoggingBookingProvider {
    async fn submit(&self, request: &BookingRequest) -> anyhow::Result<BookingStatus> {
        tracing::info!(
            booking_id = %request.id,
            doc_id = %request.doctor_id,
            date = %request.date,
            time = %request.time,
            "appointment requested"
        );
        Ok(BookingStatus::Submitted)
    }
}
