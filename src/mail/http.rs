use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::MailConfig;
use crate::error::{Error, Result};
use crate::mail::provider::{Delivery, Mailer};
use crate::mail::template::{render_contact_email, subject_line};
use crate::models::ContactMessage;

pub struct HttpMailer {
    client: Client,
    config: MailConfig,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: String,
    html: String,
    reply_to: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

impl HttpMailer {
    pub fn new(config: MailConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<Delivery> {
        let request_body = SendRequest {
            from: &self.config.from,
            to: vec![self.config.to.as_str()],
            subject: subject_line(message),
            html: render_contact_email(message, Utc::now())?,
            reply_to: &message.email,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Email(format!("Failed to reach mail relay: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Email(format!("Mail relay error ({}): {}", status, body)));
        }

        // Some relays answer with an empty body; the id is only for logs.
        let body = response.text().await.unwrap_or_default();
        let message_id = serde_json::from_str::<SendResponse>(&body)
            .ok()
            .and_then(|r| r.id);

        tracing::info!(message_id = ?message_id, "Contact email accepted by relay");
        Ok(Delivery { message_id })
    }

    fn name(&self) -> &str {
        "http-relay"
    }
}
