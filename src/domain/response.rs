use crate::domain::value::{MessageSid, MessageStatus};

/// Message resource returned by `POST /Accounts/{sid}/Messages.json`.
///
/// Every field is optional; the API may omit or null any of them depending on the
/// message state and API version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageResource {
    pub sid: Option<MessageSid>,
    pub account_sid: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub body: Option<String>,
    pub status: Option<MessageStatus>,
    pub num_segments: Option<u32>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
    pub uri: Option<String>,
    pub api_version: Option<String>,
    pub date_created: Option<String>,
    pub date_sent: Option<String>,
    pub date_updated: Option<String>,
}

/// Error document the API returns alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub more_info: Option<String>,
    pub status: Option<u16>,
}
