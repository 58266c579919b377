use askama::Template;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::ContactMessage;

pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmail<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    lines: Vec<&'a str>,
    sent_at: String,
}

pub fn subject_line(message: &ContactMessage) -> String {
    format!("{}{}", SUBJECT_PREFIX, message.subject.trim())
}

pub fn render_contact_email(message: &ContactMessage, sent_at: DateTime<Utc>) -> Result<String> {
    let email = ContactEmail {
        name: &message.name,
        email: &message.email,
        subject: &message.subject,
        lines: message.message.lines().collect(),
        sent_at: sent_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };

    Ok(email.render()?)
}
