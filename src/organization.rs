//! Organization resource: the top-level tenant that owns workspaces.

pub mod format;
mod input;
mod service;
mod types;

pub use input::{CreateOrganizationInput, ModifyOrganizationInput};
pub use service::{OrganizationApi, Organizations};
pub use types::{DeleteOrganizationOutput, Organization};
