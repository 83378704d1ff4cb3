//! Wire formats of the store and the authorization server.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Credential, CredentialSummary};

/// `GET /info`
#[derive(Debug, Deserialize)]
pub struct InfoResponse {
    #[serde(rename = "auth-server")]
    pub auth_server: AuthServerInfo,
}

#[derive(Debug, Deserialize)]
pub struct AuthServerInfo {
    #[serde(default)]
    pub url: String,
}

/// `POST {auth-server}/oauth/token`
#[derive(Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
}

/// `GET /api/v1/data?name=...`
#[derive(Debug, Deserialize)]
pub struct DataResponse {
    #[serde(default)]
    pub data: Option<Vec<Credential>>,
}

/// `GET /api/v1/data?path=...`
///
/// The store sends `null` rather than `[]` when nothing matches.
#[derive(Debug, Deserialize)]
pub struct FindResponse {
    #[serde(default)]
    pub credentials: Option<Vec<CredentialSummary>>,
}

/// `PUT /api/v1/data`
#[derive(Debug, Serialize)]
pub struct SetCredentialRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub credential_type: &'a str,
    pub value: &'a str,
}
