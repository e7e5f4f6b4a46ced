//! Integration tests for the tfe client against a mock API server

mod organizations;
mod workspaces;
