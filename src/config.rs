use std::env;

use crate::services::slots::SlotPolicy;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub doctors_path: String,
    pub currency_symbol: String,
    pub admin_token: String,
    pub slot_policy: SlotPolicy,
    pub booking_webhook_url: String,
    pub booking_webhook_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = SlotPolicy::default();
        Self {
            port: parse_var("PORT").unwrap_or(3000),
            doctors_path: env::var("DOCTORS_PATH").unwrap_or_else(|_| "doctors.json".to_string()),
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "$".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            slot_policy: SlotPolicy {
                open_hour: parse_var("OPEN_HOUR").unwrap_or(defaults.open_hour),
                close_hour: parse_var("CLOSE_HOUR").unwrap_or(defaults.close_hour),
                slot_minutes: parse_var("SLOT_MINUTES").unwrap_or(defaults.slot_minutes),
                days: parse_var("WINDOW_DAYS").unwrap_or(defaults.days),
            },
            booking_webhook_url: env::var("BOOKING_WEBHOOK_URL").unwrap_or_default(),
            booking_webhook_secret: env::var("BOOKING_WEBHOOK_SECRET").unwrap_or_default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
