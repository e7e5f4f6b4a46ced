//! Workspace operations against the remote service.

use crate::client::jsonapi::{Document, RequestDocument};
use crate::client::TfeClient;
use crate::error::{ApiError, ValidationError};
use crate::types::{required, workspace_key, ListOptions};
use crate::workspace::input::{CreateWorkspaceInput, DeleteWorkspaceInput, ModifyWorkspaceInput};
use crate::workspace::types::{DeleteWorkspaceOutput, Workspace, WorkspaceResource, WORKSPACE_TYPE};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

/// Workspace CRUD.
///
/// Each call performs one request. Inputs are validated before anything is
/// sent; a validation failure never reaches the network.
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    /// Workspaces of `organization` in server order.
    async fn list(&self, organization: &str) -> Result<Vec<Workspace>, ApiError> {
        self.list_with_options(organization, &ListOptions::default())
            .await
    }

    /// One page of workspaces of `organization`.
    async fn list_with_options(
        &self,
        organization: &str,
        options: &ListOptions,
    ) -> Result<Vec<Workspace>, ApiError>;

    async fn get(&self, organization: &str, name: &str) -> Result<Workspace, ApiError>;

    async fn create(&self, input: &CreateWorkspaceInput) -> Result<Workspace, ApiError>;

    /// Partial update; only fields set on `input` are changed.
    async fn modify(&self, input: &ModifyWorkspaceInput) -> Result<Workspace, ApiError>;

    async fn delete(&self, input: &DeleteWorkspaceInput)
        -> Result<DeleteWorkspaceOutput, ApiError>;
}

/// Workspace handle borrowed from a [`TfeClient`].
#[derive(Debug, Clone, Copy)]
pub struct Workspaces<'a> {
    client: &'a TfeClient,
}

impl TfeClient {
    pub fn workspaces(&self) -> Workspaces<'_> {
        Workspaces { client: self }
    }
}

#[async_trait]
impl WorkspaceApi for Workspaces<'_> {
    async fn list_with_options(
        &self,
        organization: &str,
        options: &ListOptions,
    ) -> Result<Vec<Workspace>, ApiError> {
        let organization = required(Some(organization), ValidationError::OrganizationRequired)?;

        let mut url = self
            .client
            .endpoint(&["organizations", organization, "workspaces"])?;
        let pairs = options.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let doc: Document<Vec<WorkspaceResource>> = self.client.get(url).await?;
        let workspaces: Vec<Workspace> = doc.data.into_iter().map(Workspace::from).collect();
        debug!(organization = %organization, count = workspaces.len(), "Listed workspaces");
        Ok(workspaces)
    }

    async fn get(&self, organization: &str, name: &str) -> Result<Workspace, ApiError> {
        let (organization, name) = workspace_key(Some(organization), Some(name))?;
        let url = self
            .client
            .endpoint(&["organizations", organization, "workspaces", name])?;

        let doc: Document<WorkspaceResource> = self.client.get(url).await?;
        Ok(doc.data.into())
    }

    async fn create(&self, input: &CreateWorkspaceInput) -> Result<Workspace, ApiError> {
        let (organization, _) = input.key()?;
        let url = self
            .client
            .endpoint(&["organizations", organization, "workspaces"])?;
        let body = RequestDocument::new(WORKSPACE_TYPE, input.attributes());

        let doc: Document<WorkspaceResource> =
            self.client.write(Method::POST, url, &body).await?;
        let workspace = Workspace::from(doc.data);
        info!(organization = %organization, workspace = %workspace.name, id = %workspace.id, "Created workspace");
        Ok(workspace)
    }

    async fn modify(&self, input: &ModifyWorkspaceInput) -> Result<Workspace, ApiError> {
        let (organization, name) = input.key()?;
        let url = self
            .client
            .endpoint(&["organizations", organization, "workspaces", name])?;
        let body = RequestDocument::new(WORKSPACE_TYPE, input.attributes());

        let doc: Document<WorkspaceResource> =
            self.client.write(Method::PATCH, url, &body).await?;
        let workspace = Workspace::from(doc.data);
        info!(organization = %organization, workspace = %name, updated = %workspace.name, "Modified workspace");
        Ok(workspace)
    }

    async fn delete(
        &self,
        input: &DeleteWorkspaceInput,
    ) -> Result<DeleteWorkspaceOutput, ApiError> {
        let (organization, name) = input.key()?;
        let url = self
            .client
            .endpoint(&["organizations", organization, "workspaces", name])?;

        self.client.delete(url).await?;
        info!(organization = %organization, workspace = %name, "Deleted workspace");
        Ok(DeleteWorkspaceOutput)
    }
}
