use crate::config::AppConfig;
use crate::directory::Directory;
use crate::services::booking::BookingProvider;
use crate::services::clock::Clock;

pub struct AppState {
    pub config: AppConfig,
    pub directory: Directory,
    pub clock: Box<dyn Clock>,
    pub booking: Box<dyn BookingProvider>,
}
