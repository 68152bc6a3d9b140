//! Outbound e-mail delivery over an HTTP e-mail API.
//!
//! Sending is fire-and-forget: the request runs on its own task and failures are
//! only logged. Without e-mail configuration every send is a logged no-op.

use serde::Serialize;

use crate::server::config::EmailConfig;

#[derive(Serialize)]
struct EmailPayload {
    from: String,
    to: String,
    subject: String,
    text: String,
}

#[derive(Clone)]
pub struct Mailer {
    http_client: reqwest::Client,
    config: Option<EmailConfig>,
}

impl Mailer {
    pub fn new(http_client: reqwest::Client, config: Option<EmailConfig>) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// A mailer that never sends anything.
    pub fn disabled() -> Self {
        Self::new(reqwest::Client::new(), None)
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Queues a plain text e-mail.
    pub fn send(&self, to: String, subject: String, text: String) {
        let Some(config) = &self.config else {
            tracing::debug!("E-mail delivery disabled, dropping mail to {}", to);
            return;
        };

        let request = self
            .http_client
            .post(&config.api_url)
            .bearer_auth(&config.api_key)
            .json(&EmailPayload {
                from: config.from.clone(),
                to: to.clone(),
                subject,
                text,
            });

        tokio::spawn(async move {
            match request.send().await.and_then(|r| r.error_for_status()) {
                Ok(_) => tracing::debug!("Sent e-mail to {}", to),
                Err(e) => tracing::error!("Failed to send e-mail to {}: {}", to, e),
            }
        });
    }
}
