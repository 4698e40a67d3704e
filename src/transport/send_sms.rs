use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::{ApiErrorBody, MessageResource, MessageSid, MessageStatus, SendSms};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    #[serde(default)]
    sid: Option<TransportScalar>,
    #[serde(default)]
    account_sid: Option<TransportScalar>,
    #[serde(default)]
    from: Option<TransportScalar>,
    #[serde(default)]
    to: Option<TransportScalar>,
    #[serde(default)]
    body: Option<TransportScalar>,
    #[serde(default)]
    status: Option<TransportScalar>,
    #[serde(default)]
    num_segments: Option<TransportScalar>,
    #[serde(default)]
    price: Option<TransportScalar>,
    #[serde(default)]
    price_unit: Option<TransportScalar>,
    #[serde(default)]
    error_code: Option<TransportScalar>,
    #[serde(default)]
    error_message: Option<TransportScalar>,
    #[serde(default)]
    uri: Option<TransportScalar>,
    #[serde(default)]
    api_version: Option<TransportScalar>,
    #[serde(default)]
    date_created: Option<TransportScalar>,
    #[serde(default)]
    date_sent: Option<TransportScalar>,
    #[serde(default)]
    date_updated: Option<TransportScalar>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorJson {
    #[serde(default)]
    code: Option<TransportScalar>,
    #[serde(default)]
    message: Option<TransportScalar>,
    #[serde(default)]
    more_info: Option<TransportScalar>,
    #[serde(default)]
    status: Option<TransportScalar>,
}

/// Resource field of any JSON type.
///
/// The API emits some numbers as strings (`"num_segments": "1"`); values of an
/// unexpected type or shape decode to `None` instead of failing the whole body.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportScalar {
    String(String),
    Number(serde_json::Number),
    Other(Value),
}

impl TransportScalar {
    fn into_string(self) -> Option<String> {
        match self {
            Self::String(value) => Some(value),
            Self::Number(value) => Some(value.to_string()),
            Self::Other(Value::Bool(value)) => Some(value.to_string()),
            Self::Other(_) => None,
        }
    }

    fn parse<T: std::str::FromStr>(self) -> Option<T> {
        self.into_string()?.trim().parse().ok()
    }
}

fn string(value: Option<TransportScalar>) -> Option<String> {
    value.and_then(TransportScalar::into_string)
}

fn number<T: std::str::FromStr>(value: Option<TransportScalar>) -> Option<T> {
    value.and_then(TransportScalar::parse)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn encode_send_sms_json(request: &SendSms) -> Value {
    json!({
        "from": request.from(),
        "to": request.to(),
        "body": request.body(),
    })
}

/// Decode a 2xx body. Any JSON object is accepted; fields that are missing or of
/// an unexpected type come back as `None`.
pub fn decode_message_json_response(json: &str) -> Result<MessageResource, TransportError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(TransportError::NotAnObject {
            kind: json_kind(&value),
        });
    }
    let parsed: MessageJsonResponse = serde_json::from_value(value)?;

    Ok(MessageResource {
        sid: string(parsed.sid).map(MessageSid::new),
        account_sid: string(parsed.account_sid),
        from: string(parsed.from),
        to: string(parsed.to),
        body: string(parsed.body),
        status: string(parsed.status).map(|it| MessageStatus::from_wire(&it)),
        num_segments: number(parsed.num_segments),
        price: string(parsed.price),
        price_unit: string(parsed.price_unit),
        error_code: number(parsed.error_code),
        error_message: string(parsed.error_message),
        uri: string(parsed.uri),
        api_version: string(parsed.api_version),
        date_created: string(parsed.date_created),
        date_sent: string(parsed.date_sent),
        date_updated: string(parsed.date_updated),
    })
}

/// Best-effort decode of an error document; `None` when the body is not one.
pub fn decode_api_error_json(json: &str) -> Option<ApiErrorBody> {
    let value: Value = serde_json::from_str(json).ok()?;
    if !value.is_object() {
        return None;
    }
    let parsed: ApiErrorJson = serde_json::from_value(value).ok()?;

    let code = number(parsed.code);
    let message = string(parsed.message);
    if code.is_none() && message.is_none() {
        return None;
    }

    Some(ApiErrorBody {
        code,
        message,
        more_info: string(parsed.more_info),
        status: number(parsed.status),
    })
}
