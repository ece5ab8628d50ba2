//! Source credential types.
//!
//! Credentials let the service crawl external sources such as Box,
//! Salesforce or SharePoint. Secret detail fields are sent on create and
//! update but never returned by the service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source the credentials connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Box.
    Box,
    /// Salesforce.
    Salesforce,
    /// SharePoint Online.
    Sharepoint,
    /// Value not known to this client. Only received, never sent.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Authentication method of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialType {
    /// OAuth 2.0 with JSON Web Tokens.
    OauthJwt,
    /// SAML.
    Saml,
    /// Username and password.
    UsernamePassword,
    /// Value not known to this client. Only received, never sent.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Connection details for a source.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialDetails {
    /// Authentication method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<CredentialType>,
    /// OAuth client identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Enterprise identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<String>,
    /// Source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Organization URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_url: Option<String>,
    /// SharePoint site collection path.
    #[serde(rename = "site_collection.path", default, skip_serializing_if = "Option::is_none")]
    pub site_collection_path: Option<String>,
    /// OAuth client secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Public key identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_id: Option<String>,
    /// Private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Passphrase of the private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for CredentialDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("CredentialDetails")
            .field("credential_type", &self.credential_type)
            .field("client_id", &self.client_id)
            .field("enterprise_id", &self.enterprise_id)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("organization_url", &self.organization_url)
            .field("site_collection_path", &self.site_collection_path)
            .field("client_secret", &redact(&self.client_secret))
            .field("public_key_id", &self.public_key_id)
            .field("private_key", &redact(&self.private_key))
            .field("passphrase", &redact(&self.passphrase))
            .field("password", &redact(&self.password))
            .finish()
    }
}

/// Stored source credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCredentials {
    /// Credential identifier.
    #[serde(default)]
    pub credential_id: Option<String>,
    /// Source type.
    #[serde(default)]
    pub source_type: Option<SourceType>,
    /// Connection details, without secrets.
    #[serde(default)]
    pub credential_details: Option<CredentialDetails>,
}

/// Response from listing credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialsList {
    /// Credentials of the environment.
    #[serde(default)]
    pub credentials: Vec<SourceCredentials>,
}

/// Response from deleting credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCredentials {
    /// Identifier of the deleted credentials.
    #[serde(default)]
    pub credential_id: Option<String>,
    /// Deletion status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Options for `create_credentials`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCredentialsOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Source type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<CredentialDetails>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateCredentialsOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            source_type: None,
            credential_details: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the source type.
    pub fn source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// Sets the connection details.
    pub fn credential_details(mut self, details: CredentialDetails) -> Self {
        self.credential_details = Some(details);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `update_credentials`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCredentialsOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Credential identifier.
    #[serde(skip)]
    pub credential_id: String,
    /// Source type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<CredentialDetails>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateCredentialsOptions {
    /// Creates options for the given credentials.
    pub fn new(environment_id: impl Into<String>, credential_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            credential_id: credential_id.into(),
            source_type: None,
            credential_details: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the source type.
    pub fn source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// Sets the connection details.
    pub fn credential_details(mut self, details: CredentialDetails) -> Self {
        self.credential_details = Some(details);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `list_credentials`.
#[derive(Debug, Clone)]
pub struct ListCredentialsOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListCredentialsOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `get_source_credentials` and `delete_credentials`.
#[derive(Debug, Clone)]
pub struct SourceCredentialsOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Credential identifier.
    pub credential_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl SourceCredentialsOptions {
    /// Creates options for the given credentials.
    pub fn new(environment_id: impl Into<String>, credential_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            credential_id: credential_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
