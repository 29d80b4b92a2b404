use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use docslots::config::AppConfig;
use docslots::directory::{load_directory, Directory};
use docslots::services::booking::log::LoggingBookingProvider;
use docslots::services::booking::webhook::WebhookBookingProvider;
use docslots::services::booking::BookingProvider;
use docslots::services::clock::SystemClock;
use docslots::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.slot_policy.validate()?;

    let doctors = load_directory(&config.doctors_path)?;

    let booking: Box<dyn BookingProvider> = if config.booking_webhook_url.is_empty() {
        tracing::info!("booking requests will be logged only");
        Box::new(LoggingBookingProvider)
    } else {
        tracing::info!("forwarding booking requests to {}", config.booking_webhook_url);
        Box::new(WebhookBookingProvider::new(
            config.booking_webhook_url.clone(),
            config.booking_webhook_secret.clone(),
        ))
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        directory: Directory::new(doctors),
        clock: Box::new(SystemClock),
        booking,
    });

    let app = docslots::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
