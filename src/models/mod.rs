pub mod booking;
pub mod doctor;
pub mod selection;
pub mod slot;

pub use booking::{BookingRequest, BookingStatus};
pub use doctor::DoctorRecord;
pub use selection::Selection;
pub use slot::{DaySlots, ScheduleWindow, Slot};
