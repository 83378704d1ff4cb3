//! Credential models as returned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credential type tag for plain string values.
pub const VALUE_TYPE: &str = "value";

/// A single credential version fetched by exact name.
///
/// The client only ever holds read-only copies; a write produces a new version
/// on the store under the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Store-assigned version id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Full name, conventionally `/`-delimited and starting with `/`
    pub name: String,

    /// Store-defined type tag (e.g. `value`)
    #[serde(rename = "type")]
    pub credential_type: String,

    /// Credential payload
    pub value: String,

    /// When the most recent version was written
    pub version_created_at: DateTime<Utc>,
}

/// Name and timestamp of a credential, as returned by a path search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSummary {
    pub name: String,
    pub version_created_at: DateTime<Utc>,
}

impl CredentialSummary {
    pub fn new(name: impl Into<String>, version_created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            version_created_at,
        }
    }
}

impl From<&Credential> for CredentialSummary {
    fn from(credential: &Credential) -> Self {
        Self::new(credential.name.clone(), credential.version_created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_credential_deserializes_store_payload() {
        let json = r#"{
            "id": "67fc3def-bbfb-4953-83f8-4ab0682ad675",
            "name": "/some-cred",
            "type": "value",
            "value": "some-value",
            "version_created_at": "2017-01-05T01:01:01Z"
        }"#;

        let credential: Credential = serde_json::from_str(json).unwrap();
        assert_eq!(credential.name, "/some-cred");
        assert_eq!(credential.credential_type, VALUE_TYPE);
        assert_eq!(credential.value, "some-value");
        assert_eq!(
            credential.version_created_at,
            Utc.with_ymd_and_hms(2017, 1, 5, 1, 1, 1).unwrap()
        );
        assert!(credential.id.is_some());
    }

    #[test]
    fn test_summary_ignores_value_fields() {
        let json = r#"{"name": "/dir/cred", "version_created_at": "2020-03-01T17:04:30Z"}"#;
        let summary: CredentialSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.name, "/dir/cred");
    }

    #[test]
    fn test_summary_from_credential() {
        let at = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        let credential = Credential {
            id: None,
            name: "/a".to_string(),
            credential_type: VALUE_TYPE.to_string(),
            value: "v".to_string(),
            version_created_at: at,
        };
        assert_eq!(CredentialSummary::from(&credential), CredentialSummary::new("/a", at));
    }
}
