//! Wire types for the configuration service

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Key/value pairs of one configuration version, in the order the server sent them.
pub type ConfigurationMap = IndexMap<String, String>;

/// Resource path of a configuration set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub organization: String,
    pub service: String,
    pub namespace: String,
}

impl Scope {
    pub fn new(
        organization: impl Into<String>,
        service: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            service: service.into(),
            namespace: namespace.into(),
        }
    }

    /// `organization/service/namespace`, without leading or trailing slash.
    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.organization, self.service, self.namespace)
    }
}

/// One immutable version of a configuration set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationVersion {
    #[serde(default)]
    pub version: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub configuration: ConfigurationMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
}

/// Response of `GET .../latest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestVersion {
    pub version: i64,
}

/// Response of `GET .../versions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<i64>,
}

/// Body of `POST {scope}`
#[derive(Debug, Serialize)]
pub struct ConfigurationPayload<'a> {
    pub configuration: &'a ConfigurationMap,
}

/// Error body returned by the service on failed requests.
///
/// Both fields are loosely typed: the service sends the status as a number
/// and the message as a string, but neither is guaranteed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorEnvelope {
    /// Status and message as display text, falling back to the HTTP status
    /// line when a field is absent.
    pub fn describe(&self, http_status: reqwest::StatusCode) -> (String, String) {
        let status = self
            .status
            .as_ref()
            .and_then(value_text)
            .unwrap_or_else(|| http_status.as_u16().to_string());
        let message = self
            .message
            .as_ref()
            .and_then(value_text)
            .unwrap_or_else(|| http_status.canonical_reason().unwrap_or_default().to_string());
        (status, message)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Result of submitting a new configuration version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// HTTP 201: the server stored a new version.
    Created,
    /// Any other status, with the server's error envelope.
    Rejected { status: String, message: String },
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
