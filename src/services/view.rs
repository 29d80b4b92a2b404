use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::{DoctorRecord, ScheduleWindow, Selection};
use crate::services::profile::related_doctors;

pub const NO_SLOTS: &str = "No slots available";
pub const NO_TIME_SLOTS: &str = "No time slots available";
pub const BOOK_LABEL: &str = "Book an appointment";

/// Everything the appointment page shows, already resolved against the
/// current selection. Serialized as-is for client renderers.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    pub doctor_id: String,
    pub profile: ProfileSection,
    pub selection: Selection,
    pub days: Vec<DayChip>,
    pub days_message: Option<String>,
    pub times: Vec<TimeChip>,
    pub times_message: Option<String>,
    pub booking: BookingAction,
    pub related: RelatedSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSection {
    pub name: String,
    pub image: String,
    pub verified: bool,
    pub qualification: String,
    pub experience: String,
    pub about: String,
    pub fee: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayChip {
    pub index: usize,
    pub date: NaiveDate,
    pub weekday: String,
    pub day_of_month: u32,
    pub slot_count: usize,
    pub selected: bool,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeChip {
    pub time: String,
    pub label: String,
    pub datetime: NaiveDateTime,
    pub selected: bool,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingAction {
    pub label: String,
    pub enabled: bool,
    pub endpoint: String,
    pub form_action: String,
}

/// Hand-off to the related-doctors section.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedSection {
    pub doctor_id: String,
    pub speciality: String,
    pub doctors: Vec<RelatedDoctor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedDoctor {
    pub id: String,
    pub name: String,
    pub image: String,
    pub speciality: String,
    pub href: String,
}

pub fn page_path(doc_id: &str) -> String {
    format!("/appointment/{}", encode_component(doc_id))
}

pub fn booking_path(doc_id: &str) -> String {
    format!("/api/appointment/{}/book", encode_component(doc_id))
}

pub fn build_view(
    doctor: &DoctorRecord,
    schedule: &ScheduleWindow,
    selection: &Selection,
    currency_symbol: &str,
    directory: &[DoctorRecord],
) -> AppointmentView {
    let base = page_path(&doctor.id);

    let days: Vec<DayChip> = schedule
        .days
        .iter()
        .enumerate()
        .map(|(index, day)| DayChip {
            index,
            date: day.date,
            weekday: day.weekday_label().to_string(),
            day_of_month: day.day_of_month(),
            slot_count: day.slots.len(),
            selected: index == selection.day,
            href: format!("{base}?day={index}"),
        })
        .collect();

    let days_message = (!schedule.has_any_slot()).then(|| NO_SLOTS.to_string());

    let selected_day = schedule.day(selection.day);
    let times: Vec<TimeChip> = selected_day
        .map(|day| {
            day.slots
                .iter()
                .map(|slot| TimeChip {
                    time: slot.time.clone(),
                    label: slot.time.to_lowercase(),
                    datetime: slot.datetime,
                    selected: selection.is_time_selected(&slot.time),
                    href: format!(
                        "{base}?day={}&time={}",
                        selection.day,
                        encode_component(&slot.time)
                    ),
                })
                .collect()
        })
        .unwrap_or_default();

    let times_message = times.is_empty().then(|| NO_TIME_SLOTS.to_string());
    let bookable = times.iter().any(|t| t.selected);

    let related = RelatedSection {
        doctor_id: doctor.id.clone(),
        speciality: doctor.speciality.clone(),
        doctors: related_doctors(directory, &doctor.id, &doctor.speciality)
            .into_iter()
            .map(|doc| RelatedDoctor {
                id: doc.id.clone(),
                name: doc.name.clone(),
                image: doc.image.clone(),
                speciality: doc.speciality.clone(),
                href: page_path(&doc.id),
            })
            .collect(),
    };

    AppointmentView {
        doctor_id: doctor.id.clone(),
        profile: ProfileSection {
            name: doctor.name.clone(),
            image: doctor.image.clone(),
            verified: true,
            qualification: doctor.qualification(),
            experience: doctor.experience_label(),
            about: doctor.about.clone(),
            fee: doctor.fee_label(currency_symbol),
        },
        selection: selection.clone(),
        days,
        days_message,
        times,
        times_message,
        booking: BookingAction {
            label: BOOK_LABEL.to_string(),
            enabled: bookable,
            endpoint: booking_path(&doctor.id),
            form_action: format!("{base}/book"),
        },
        related,
    }
}

/// Percent-encode everything outside the URL unreserved set.
pub fn encode_component(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}
