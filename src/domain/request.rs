use crate::domain::value::{MessageBody, RawPhoneNumber};

/// One outbound message: sender, recipient and text.
///
/// [`SendSms::new`] takes validated values; [`SendSms::from_parts`] forwards the
/// strings exactly as given and leaves rejection to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    from: String,
    to: String,
    body: String,
}

impl SendSms {
    pub fn new(from: RawPhoneNumber, to: RawPhoneNumber, body: MessageBody) -> Self {
        Self {
            from: from.into_string(),
            to: to.into_string(),
            body: body.into_string(),
        }
    }

    /// Build a request from plain strings without trimming or validation.
    pub fn from_parts(
        from: impl Into<String>,
        to: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            body: body.into(),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
