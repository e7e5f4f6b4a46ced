//! Organization request inputs.

use crate::error::ValidationError;
use crate::types::required;
use serde::Serialize;

/// Options for creating an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOrganizationInput {
    /// Required.
    pub name: Option<String>,
    /// Admin contact address. Required.
    pub email: Option<String>,
    pub session_timeout: Option<u32>,
    pub session_remember: Option<u32>,
}

impl CreateOrganizationInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required(self.name.as_deref(), ValidationError::NameRequired)?;
        required(self.email.as_deref(), ValidationError::EmailRequired)?;
        Ok(())
    }

    pub(crate) fn attributes(&self) -> OrganizationWriteAttributes<'_> {
        OrganizationWriteAttributes {
            name: self.name.as_deref(),
            email: self.email.as_deref(),
            session_timeout: self.session_timeout,
            session_remember: self.session_remember,
        }
    }
}

/// Partial update of an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyOrganizationInput {
    /// Current name. Required.
    pub name: Option<String>,
    pub rename: Option<String>,
    pub email: Option<String>,
    pub session_timeout: Option<u32>,
    pub session_remember: Option<u32>,
}

impl ModifyOrganizationInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.key().map(|_| ())
    }

    pub(crate) fn key(&self) -> Result<&str, ValidationError> {
        required(self.name.as_deref(), ValidationError::NameRequired)
    }

    pub(crate) fn attributes(&self) -> OrganizationWriteAttributes<'_> {
        OrganizationWriteAttributes {
            name: self.rename.as_deref(),
            email: self.email.as_deref(),
            session_timeout: self.session_timeout,
            session_remember: self.session_remember,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct OrganizationWriteAttributes<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_remember: Option<u32>,
}
