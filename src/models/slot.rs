use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    pub datetime: NaiveDateTime,
    /// 12-hour label, e.g. "02:30 PM".
    pub time: String,
}

impl Slot {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self {
            datetime,
            time: datetime.format("%I:%M %p").to_string(),
        }
    }

    pub fn matches_label(&self, label: &str) -> bool {
        self.time.eq_ignore_ascii_case(label.trim())
    }
}

/// Bookable times for one calendar day, in time order. May be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

impl DaySlots {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Weekday abbreviation taken from the date, so empty days are labelled too.
    pub fn weekday_label(&self) -> &'static str {
        WEEKDAYS[self.date.weekday().num_days_from_sunday() as usize]
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn find(&self, label: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.matches_label(label))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleWindow {
    pub days: Vec<DaySlots>,
}

impl ScheduleWindow {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, index: usize) -> Option<&DaySlots> {
        self.days.get(index)
    }

    pub fn has_any_slot(&self) -> bool {
        self.days.iter().any(|d| !d.is_empty())
    }
}
