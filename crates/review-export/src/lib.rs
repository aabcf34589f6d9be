#![deny(unsafe_code)]

pub mod error;
pub mod payload;
pub mod webhook;

pub use error::ExportError;
pub use payload::build_payload;
pub use webhook::WebhookClient;
