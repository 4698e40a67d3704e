use serde::Deserialize;
use url::Url;

use crate::domain::validation::ValidationError;
use crate::domain::value::{AccountSid, BaseUrl};

/// Production root of the Twilio REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

/// Settings for a [`TwilioClient`](crate::TwilioClient).
///
/// Deserializes from camelCase keys (`baseUrl`, `accountSid`); both values are
/// validated while deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    base_url: BaseUrl,
    account_sid: AccountSid,
}

impl ClientConfig {
    pub fn new(
        base_url: impl AsRef<str>,
        account_sid: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: BaseUrl::new(base_url)?,
            account_sid: AccountSid::new(account_sid)?,
        })
    }

    /// Use [`DEFAULT_BASE_URL`] with the given account SID.
    pub fn with_default_base_url(account_sid: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(DEFAULT_BASE_URL, account_sid)
    }

    pub fn from_parts(base_url: BaseUrl, account_sid: AccountSid) -> Self {
        Self {
            base_url,
            account_sid,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// `{base_url}/Accounts/{account_sid}/Messages.json`
    pub fn messages_url(&self) -> Url {
        self.base_url
            .join_segments(["Accounts", self.account_sid.as_str(), "Messages.json"])
    }

    pub(crate) fn set_base_url(&mut self, base_url: BaseUrl) {
        self.base_url = base_url;
    }
}
