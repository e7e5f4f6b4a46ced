//! Workspace request inputs and their local validation.

use crate::error::ValidationError;
use crate::types::workspace_key;
use serde::Serialize;

/// Options for creating a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateWorkspaceInput {
    /// Organization that will own the workspace. Required.
    pub organization: Option<String>,
    /// Workspace name, unique within the organization. Required.
    pub name: Option<String>,
    pub auto_apply: Option<bool>,
    pub terraform_version: Option<String>,
    pub working_directory: Option<String>,
}

impl CreateWorkspaceInput {
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: Some(organization.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.key().map(|_| ())
    }

    /// `(organization, name)` once both are present.
    pub(crate) fn key(&self) -> Result<(&str, &str), ValidationError> {
        workspace_key(self.organization.as_deref(), self.name.as_deref())
    }

    pub(crate) fn attributes(&self) -> WorkspaceWriteAttributes<'_> {
        WorkspaceWriteAttributes {
            name: self.name.as_deref(),
            auto_apply: self.auto_apply,
            terraform_version: self.terraform_version.as_deref(),
            working_directory: self.working_directory.as_deref(),
        }
    }
}

/// Options for a partial update. Unset fields are left unchanged remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyWorkspaceInput {
    /// Organization owning the workspace. Required.
    pub organization: Option<String>,
    /// Current workspace name. Required.
    pub name: Option<String>,
    /// New name; the workspace id is preserved.
    pub rename: Option<String>,
    pub auto_apply: Option<bool>,
    pub terraform_version: Option<String>,
    pub working_directory: Option<String>,
}

impl ModifyWorkspaceInput {
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: Some(organization.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.key().map(|_| ())
    }

    /// `(organization, name)` once both are present.
    pub(crate) fn key(&self) -> Result<(&str, &str), ValidationError> {
        workspace_key(self.organization.as_deref(), self.name.as_deref())
    }

    pub(crate) fn attributes(&self) -> WorkspaceWriteAttributes<'_> {
        WorkspaceWriteAttributes {
            name: self.rename.as_deref(),
            auto_apply: self.auto_apply,
            terraform_version: self.terraform_version.as_deref(),
            working_directory: self.working_directory.as_deref(),
        }
    }
}

/// Identifies the workspace to delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteWorkspaceInput {
    pub organization: Option<String>,
    pub name: Option<String>,
}

impl DeleteWorkspaceInput {
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: Some(organization.into()),
            name: Some(name.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.key().map(|_| ())
    }

    /// `(organization, name)` once both are present.
    pub(crate) fn key(&self) -> Result<(&str, &str), ValidationError> {
        workspace_key(self.organization.as_deref(), self.name.as_deref())
    }
}

/// Attributes sent on create and modify; `None` fields are omitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct WorkspaceWriteAttributes<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terraform_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_directory: Option<&'a str>,
}
