//! Organization operations against the remote service.

use crate::client::jsonapi::{Document, RequestDocument};
use crate::client::TfeClient;
use crate::error::{ApiError, ValidationError};
use crate::organization::input::{CreateOrganizationInput, ModifyOrganizationInput};
use crate::organization::types::{
    DeleteOrganizationOutput, Organization, OrganizationResource, ORGANIZATION_TYPE,
};
use crate::types::{required, ListOptions};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

/// Organization CRUD. One request per call.
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Organization>, ApiError> {
        self.list_with_options(&ListOptions::default()).await
    }

    async fn list_with_options(&self, options: &ListOptions)
        -> Result<Vec<Organization>, ApiError>;

    async fn get(&self, name: &str) -> Result<Organization, ApiError>;

    async fn create(&self, input: &CreateOrganizationInput) -> Result<Organization, ApiError>;

    async fn modify(&self, input: &ModifyOrganizationInput) -> Result<Organization, ApiError>;

    /// Deletes the organization and every workspace it owns.
    async fn delete(&self, name: &str) -> Result<DeleteOrganizationOutput, ApiError>;
}

/// Organization handle borrowed from a [`TfeClient`].
#[derive(Debug, Clone, Copy)]
pub struct Organizations<'a> {
    client: &'a TfeClient,
}

impl TfeClient {
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations { client: self }
    }
}

#[async_trait]
impl OrganizationApi for Organizations<'_> {
    async fn list_with_options(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<Organization>, ApiError> {
        let mut url = self.client.endpoint(&["organizations"])?;
        let pairs = options.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let doc: Document<Vec<OrganizationResource>> = self.client.get(url).await?;
        let organizations: Vec<Organization> =
            doc.data.into_iter().map(Organization::from).collect();
        debug!(count = organizations.len(), "Listed organizations");
        Ok(organizations)
    }

    async fn get(&self, name: &str) -> Result<Organization, ApiError> {
        let name = required(Some(name), ValidationError::NameRequired)?;
        let url = self.client.endpoint(&["organizations", name])?;

        let doc: Document<OrganizationResource> = self.client.get(url).await?;
        Ok(doc.data.into())
    }

    async fn create(&self, input: &CreateOrganizationInput) -> Result<Organization, ApiError> {
        input.validate()?;
        let url = self.client.endpoint(&["organizations"])?;
        let body = RequestDocument::new(ORGANIZATION_TYPE, input.attributes());

        let doc: Document<OrganizationResource> =
            self.client.write(Method::POST, url, &body).await?;
        let organization = Organization::from(doc.data);
        info!(organization = %organization.name, "Created organization");
        Ok(organization)
    }

    async fn modify(&self, input: &ModifyOrganizationInput) -> Result<Organization, ApiError> {
        let name = input.key()?;
        let url = self.client.endpoint(&["organizations", name])?;
        let body = RequestDocument::new(ORGANIZATION_TYPE, input.attributes());

        let doc: Document<OrganizationResource> =
            self.client.write(Method::PATCH, url, &body).await?;
        let organization = Organization::from(doc.data);
        info!(organization = %name, updated = %organization.name, "Modified organization");
        Ok(organization)
    }

    async fn delete(&self, name: &str) -> Result<DeleteOrganizationOutput, ApiError> {
        let name = required(Some(name), ValidationError::NameRequired)?;
        let url = self.client.endpoint(&["organizations", name])?;

        self.client.delete(url).await?;
        info!(organization = %name, "Deleted organization");
        Ok(DeleteOrganizationOutput)
    }
}
