pub mod booking;
pub mod clock;
pub mod profile;
pub mod render;
pub mod slots;
pub mod view;
