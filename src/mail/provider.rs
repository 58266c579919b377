use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::ContactMessage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delivery {
    pub message_id: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact(&self, message: &ContactMessage) -> Result<Delivery>;
    fn name(&self) -> &str;
}

pub struct UnconfiguredMailer;

#[async_trait]
impl Mailer for UnconfiguredMailer {
    async fn send_contact(&self, _message: &ContactMessage) -> Result<Delivery> {
        Err(Error::Email("email delivery is not configured".to_string()))
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}
