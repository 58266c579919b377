pub mod provider;
pub mod http;
pub mod template;

pub use provider::{Delivery, Mailer, UnconfiguredMailer};
pub use http::HttpMailer;
