use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the "Book an appointment" action hands to the booking subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub datetime: NaiveDateTime,
    pub requested_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Submitted,
    Forwarded,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Submitted => "submitted",
            BookingStatus::Forwarded => "forwarded",
        }
    }
}
