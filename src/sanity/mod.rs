pub mod client;

pub use client::{projects_query, SanityClient};
