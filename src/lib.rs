//! Typed Rust client for the Twilio Messages API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details, and a small client layer that issues one HTTP request per
//! call.
//!
//! ```rust,no_run
//! use twilio_sms::{ClientConfig, TwilioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), twilio_sms::TwilioError> {
//!     let config = ClientConfig::with_default_base_url("AC...")?;
//!     let client = TwilioClient::new(config);
//!     let message = client.send_sms("+15005550006", "+15551234567", "hello").await?;
//!     println!("{:?}", message.sid);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TwilioClient, TwilioClientBuilder, TwilioError};
pub use domain::{
    AccountSid, ApiErrorBody, BaseUrl, ClientConfig, DEFAULT_BASE_URL, MessageBody,
    MessageResource, MessageSid, MessageStatus, PhoneNumber, RawPhoneNumber, SendSms,
    ValidationError,
};
