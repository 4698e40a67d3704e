//! Domain layer: strong types with validation and invariants (no I/O).

mod config;
mod request;
mod response;
mod validation;
mod value;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use request::SendSms;
pub use response::{ApiErrorBody, MessageResource};
pub use validation::ValidationError;
pub use value::{
    AccountSid, BaseUrl, MessageBody, MessageSid, MessageStatus, PhoneNumber, RawPhoneNumber,
};
