//! Workspace records decoded from the service.

use crate::client::jsonapi::{Relationship, Resource};
use crate::types::Permissions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON:API resource type of workspaces.
pub(crate) const WORKSPACE_TYPE: &str = "workspaces";

/// A workspace within an organization.
///
/// `id` is stable across renames; `(organization, name)` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    /// Owning organization name, when the service includes the relationship.
    pub organization: Option<String>,
    pub auto_apply: bool,
    pub terraform_version: String,
    /// Relative path Terraform runs in; `None` means the repository root.
    pub working_directory: Option<String>,
    pub locked: bool,
    pub environment: String,
    pub can_queue_destroy_plan: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub permissions: Permissions,
}

/// Marker returned by a successful delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteWorkspaceOutput;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct WorkspaceAttributes {
    name: String,
    #[serde(default)]
    auto_apply: bool,
    #[serde(default)]
    terraform_version: String,
    #[serde(default)]
    working_directory: Option<String>,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    environment: String,
    #[serde(default)]
    can_queue_destroy_plan: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    permissions: Permissions,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WorkspaceRelationships {
    #[serde(default)]
    organization: Option<Relationship>,
}

pub(crate) type WorkspaceResource = Resource<WorkspaceAttributes, WorkspaceRelationships>;

impl From<WorkspaceResource> for Workspace {
    fn from(resource: WorkspaceResource) -> Self {
        let attributes = resource.attributes;
        let organization = resource
            .relationships
            .organization
            .and_then(|rel| rel.data)
            .map(|data| data.id);

        Workspace {
            id: resource.id,
            name: attributes.name,
            organization,
            auto_apply: attributes.auto_apply,
            terraform_version: attributes.terraform_version,
            working_directory: attributes.working_directory.filter(|dir| !dir.is_empty()),
            locked: attributes.locked,
            environment: attributes.environment,
            can_queue_destroy_plan: attributes.can_queue_destroy_plan,
            created_at: attributes.created_at,
            permissions: attributes.permissions,
        }
    }
}
