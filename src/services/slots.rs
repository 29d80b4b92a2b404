use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{DaySlots, ScheduleWindow, Slot};

/// Daily opening window and slot size used when enumerating bookable times.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SlotPolicy {
    pub open_hour: u32,
    pub close_hour: u32,
    pub slot_minutes: u32,
    pub days: usize,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            open_hour: 10,
            close_hour: 21,
            slot_minutes: 30,
            days: 7,
        }
    }
}

impl SlotPolicy {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.slot_minutes == 0 {
            return Err(AppError::Config("slot length must be positive".to_string()));
        }
        if self.days == 0 {
            return Err(AppError::Config("window must cover at least one day".to_string()));
        }
        if self.close_hour > 24 || self.open_hour >= self.close_hour {
            return Err(AppError::Config(format!(
                "invalid opening hours: {}-{}",
                self.open_hour, self.close_hour
            )));
        }
        Ok(())
    }
}

/// Enumerate the bookable window starting on the day of `now`.
///
/// Today starts on the next full hour after `now` (never before opening);
/// later days start at opening. Every slot begins strictly before closing.
pub fn generate_schedule(now: NaiveDateTime, policy: &SlotPolicy) -> ScheduleWindow {
    let today = now.date();
    let days = (0..policy.days)
        .map(|i| {
            let date = today + Duration::days(i as i64);
            let start_hour = if i == 0 {
                policy.open_hour.max(now.hour() + 1)
            } else {
                policy.open_hour
            };
            DaySlots {
                date,
                slots: day_slots(date, start_hour, policy),
            }
        })
        .collect();

    ScheduleWindow { days }
}

fn day_slots(date: NaiveDate, start_hour: u32, policy: &SlotPolicy) -> Vec<Slot> {
    let midnight = date.and_time(NaiveTime::default());
    // start_hour may be 24 here; that lands on the next midnight, past closing
    let mut cursor = midnight + Duration::hours(start_hour as i64);
    let end = midnight + Duration::hours(policy.close_hour as i64);
    let step = Duration::minutes(policy.slot_minutes as i64);

    let mut slots = Vec::new();
    while cursor < end {
        slots.push(Slot::new(cursor));
        cursor += step;
    }
    slots
}
