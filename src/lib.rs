//! tfe: typed client for the Terraform Enterprise organization/workspace API
//!
//! Organizations and workspaces are exposed as async, strongly-typed calls.
//! Inputs are validated locally; every operation is exactly one JSON:API
//! request/response round trip against the remote service.
//!
//! ```no_run
//! use tfe::{CreateWorkspaceInput, TfeClient, WorkspaceApi};
//!
//! # async fn run() -> Result<(), tfe::ApiError> {
//! let client = TfeClient::with_token("https://app.terraform.io", "token")?;
//! let input = CreateWorkspaceInput {
//!     auto_apply: Some(true),
//!     ..CreateWorkspaceInput::new("acme", "networking")
//! };
//! let workspace = client.workspaces().create(&input).await?;
//! println!("{}", workspace.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod organization;
pub mod tooling;
pub mod types;
pub mod workspace;

pub use client::TfeClient;
pub use config::{ConfigLoader, TfeConfig};
pub use error::{ApiError, ValidationError};
pub use organization::{
    CreateOrganizationInput, DeleteOrganizationOutput, ModifyOrganizationInput, Organization,
    OrganizationApi, Organizations,
};
pub use types::{ListOptions, Permissions};
pub use workspace::{
    CreateWorkspaceInput, DeleteWorkspaceInput, DeleteWorkspaceOutput, ModifyWorkspaceInput,
    Workspace, WorkspaceApi, Workspaces,
};
