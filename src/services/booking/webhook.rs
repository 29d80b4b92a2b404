use anyhow::Context;
use async_trait::async_trait;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::BookingProvider;
use crate::models::{BookingRequest, BookingStatus};

pub const SIGNATURE_HEADER: &str = "x-booking-signature";

/// Forwards booking requests as JSON to an external endpoint.
pub struct WebhookBookingProvider {
    url: String,
    secret: String,
    client: reqwest::Client,
}

impl WebhookBookingProvider {
    pub fn new(url: String, secret: String) -> Self {
        Self {
            url,
            secret,
            client: reqwest::Client::new(),
        }
    }
}

/// Base64 HMAC-SHA1 of the raw body.
pub fn sign_payload(secret: &str, body: &[u8]) -> anyhow::Result<String> {
    let mut mac = Hmac::<Sha1>::new_from_slice(secret.as_bytes())
        .map_err(|e| anyhow::anyhow!("invalid signing key: {e}"))?;
    mac.update(body);
    let result = mac.finalize().into_bytes();
    Ok(base64::engine::general_purpose::STANDARD.encode(result))
}

#[async_trait]
impl BookingProvider for WebhookBookingProvider {
    async fn submit(&self, request: &BookingRequest) -> anyhow::Result<BookingStatus> {
        let body = serde_json::to_vec(request).context("failed to encode booking request")?;

        let mut builder = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        // empty secret = unsigned delivery
        if !self.secret.is_empty() {
            builder = builder.header(SIGNATURE_HEADER, sign_payload(&self.secret, &body)?);
        }

        builder
            .body(body)
            .send()
            .await
            .context("failed to deliver booking request")?
            .error_for_status()
            .context("booking endpoint returned error")?;

        tracing::info!(booking_id = %request.id, url = %self.url, "booking request forwarded");
        Ok(BookingStatus::Forwarded)
    }
}
