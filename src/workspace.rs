//! Workspace resource: types, inputs, the service trait and text formatting.

pub mod format;
mod input;
mod service;
mod types;

pub use input::{CreateWorkspaceInput, DeleteWorkspaceInput, ModifyWorkspaceInput};
pub use service::{WorkspaceApi, Workspaces};
pub use types::{DeleteWorkspaceOutput, Workspace};
