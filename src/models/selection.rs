use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Picker state owned by one rendering of the appointment page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    pub day: usize,
    pub time: Option<String>,
}

impl Selection {
    pub fn new(day: usize, time: Option<String>) -> Self {
        Self { day, time }
    }

    /// Moving to a different day drops the chosen time.
    pub fn select_day(&mut self, index: usize, days: usize) -> Result<(), AppError> {
        if index >= days {
            return Err(AppError::BadRequest(format!(
                "day index {index} is outside the {days}-day window"
            )));
        }
        if index != self.day {
            self.time = None;
        }
        self.day = index;
        Ok(())
    }

    pub fn select_time(&mut self, label: &str) {
        self.time = Some(label.trim().to_string());
    }

    pub fn is_time_selected(&self, label: &str) -> bool {
        self.time
            .as_deref()
            .map(|t| t.eq_ignore_ascii_case(label))
            .unwrap_or(false)
    }
}
