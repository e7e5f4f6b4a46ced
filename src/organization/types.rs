//! Organization records decoded from the service.

use crate::client::jsonapi::Resource;
use crate::types::Permissions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON:API resource type of organizations.
pub(crate) const ORGANIZATION_TYPE: &str = "organizations";

/// An organization. `name` is both its identifier and lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: String,
    pub email: String,
    /// Idle session timeout, in minutes.
    pub session_timeout: Option<u32>,
    /// Session lifetime, in minutes.
    pub session_remember: Option<u32>,
    pub collaborator_auth_policy: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub permissions: Permissions,
}

/// Marker returned by a successful delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOrganizationOutput;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct OrganizationAttributes {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    session_timeout: Option<u32>,
    #[serde(default)]
    session_remember: Option<u32>,
    #[serde(default)]
    collaborator_auth_policy: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    permissions: Permissions,
}

pub(crate) type OrganizationResource = Resource<OrganizationAttributes>;

impl From<OrganizationResource> for Organization {
    fn from(resource: OrganizationResource) -> Self {
        let attributes = resource.attributes;
        Organization {
            // The resource id is the organization name.
            name: attributes.name.unwrap_or(resource.id),
            email: attributes.email,
            session_timeout: attributes.session_timeout,
            session_remember: attributes.session_remember,
            collaborator_auth_policy: attributes.collaborator_auth_policy,
            created_at: attributes.created_at,
            permissions: attributes.permissions,
        }
    }
}
