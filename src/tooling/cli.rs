//! CLI Tooling
//!
//! Command-line interface for organization and workspace management. Every
//! subcommand maps onto one client call and renders its result as text or
//! JSON.

use crate::client::TfeClient;
use crate::config::{ConfigLoader, TfeConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::organization::format::{format_organization_list_text, format_organization_show_text};
use crate::organization::{CreateOrganizationInput, ModifyOrganizationInput, OrganizationApi};
use crate::types::ListOptions;
use crate::workspace::format::{format_workspace_list_text, format_workspace_show_text};
use crate::workspace::{
    CreateWorkspaceInput, DeleteWorkspaceInput, ModifyWorkspaceInput, WorkspaceApi,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::future::Future;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::debug;

/// tfe CLI - Terraform Enterprise organizations and workspaces
#[derive(Parser)]
#[command(name = "tfe")]
#[command(about = "Manage Terraform Enterprise organizations and workspaces")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Service address (overrides config and TFE_ADDRESS)
    #[arg(long)]
    pub address: Option<String>,

    /// API token (overrides config and TFE_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage organizations
    Organization {
        #[command(subcommand)]
        command: OrganizationCommands,
    },
    /// Manage workspaces
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },
    /// Inspect the resolved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum OrganizationCommands {
    /// List organizations visible to the token
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one organization
    Show {
        name: String,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Create an organization
    Create {
        #[arg(long)]
        name: String,
        /// Admin email address
        #[arg(long)]
        email: String,
        /// Idle session timeout in minutes
        #[arg(long)]
        session_timeout: Option<u32>,
        /// Session lifetime in minutes
        #[arg(long)]
        session_remember: Option<u32>,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Update an organization; unset flags are left unchanged
    Modify {
        name: String,
        #[arg(long)]
        rename: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        session_timeout: Option<u32>,
        #[arg(long)]
        session_remember: Option<u32>,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Delete an organization and all of its workspaces
    Delete {
        name: String,
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkspaceCommands {
    /// List workspaces of an organization
    List {
        #[arg(long = "org")]
        organization: String,
        /// Page number to fetch
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long)]
        page_size: Option<u32>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one workspace
    Show {
        #[arg(long = "org")]
        organization: String,
        name: String,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Create a workspace
    Create {
        #[arg(long = "org")]
        organization: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        auto_apply: Option<bool>,
        #[arg(long)]
        terraform_version: Option<String>,
        #[arg(long)]
        working_directory: Option<String>,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Update a workspace; unset flags are left unchanged
    Modify {
        #[arg(long = "org")]
        organization: String,
        name: String,
        #[arg(long)]
        rename: Option<String>,
        #[arg(long)]
        auto_apply: Option<bool>,
        #[arg(long)]
        terraform_version: Option<String>,
        #[arg(long)]
        working_directory: Option<String>,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Delete a workspace
    Delete {
        #[arg(long = "org")]
        organization: String,
        name: String,
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration with the token masked
    Show,
}

impl Cli {
    /// Load configuration and fold command-line overrides into it.
    pub fn load_config(&self) -> Result<TfeConfig, ApiError> {
        let mut config = ConfigLoader::load(self.config.as_deref())?
            .with_overrides(self.address.clone(), self.token.clone());
        config.logging = self.logging_config(config.logging);
        Ok(config)
    }

    fn logging_config(&self, mut logging: LoggingConfig) -> LoggingConfig {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }
}

/// CLI context holding the resolved configuration and the async runtime the
/// client calls are driven on.
pub struct CliContext {
    config: TfeConfig,
    runtime: Runtime,
}

impl CliContext {
    pub fn new(config: TfeConfig) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to start runtime: {}", e)))?;
        Ok(Self { config, runtime })
    }

    pub fn config(&self) -> &TfeConfig {
        &self.config
    }

    /// Execute a CLI command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Organization { command } => self.handle_organization_command(command),
            Commands::Workspace { command } => self.handle_workspace_command(command),
            Commands::Config { command } => match command {
                ConfigCommands::Show => toml::to_string_pretty(&self.config.redacted())
                    .map_err(|e| ApiError::Encode(e.to_string())),
            },
        }
    }

    /// The client is built per command so `config show` works without a token.
    fn client(&self) -> Result<TfeClient, ApiError> {
        TfeClient::new(&self.config)
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn handle_organization_command(
        &self,
        command: &OrganizationCommands,
    ) -> Result<String, ApiError> {
        let client = self.client()?;
        let organizations = client.organizations();
        match command {
            OrganizationCommands::List { format } => {
                let list = self.block_on(organizations.list())?;
                render(format, &list, |l| format_organization_list_text(l))
            }
            OrganizationCommands::Show { name, format } => {
                let org = self.block_on(organizations.get(name))?;
                render(format, &org, format_organization_show_text)
            }
            OrganizationCommands::Create {
                name,
                email,
                session_timeout,
                session_remember,
                format,
            } => {
                let input = CreateOrganizationInput {
                    session_timeout: *session_timeout,
                    session_remember: *session_remember,
                    ..CreateOrganizationInput::new(name.as_str(), email.as_str())
                };
                let org = self.block_on(organizations.create(&input))?;
                render(format, &org, format_organization_show_text)
            }
            OrganizationCommands::Modify {
                name,
                rename,
                email,
                session_timeout,
                session_remember,
                format,
            } => {
                let input = ModifyOrganizationInput {
                    rename: rename.clone(),
                    email: email.clone(),
                    session_timeout: *session_timeout,
                    session_remember: *session_remember,
                    ..ModifyOrganizationInput::new(name.as_str())
                };
                let org = self.block_on(organizations.modify(&input))?;
                render(format, &org, format_organization_show_text)
            }
            OrganizationCommands::Delete { name, yes } => {
                let prompt = format!("Delete organization '{}' and all of its workspaces?", name);
                if !*yes && !confirm(&prompt)? {
                    return Ok("Deletion cancelled".to_string());
                }
                self.block_on(organizations.delete(name))?;
                Ok(format!("Deleted organization: {}", name))
            }
        }
    }

    fn handle_workspace_command(&self, command: &WorkspaceCommands) -> Result<String, ApiError> {
        let client = self.client()?;
        let workspaces = client.workspaces();
        match command {
            WorkspaceCommands::List {
                organization,
                page,
                page_size,
                format,
            } => {
                let options = ListOptions {
                    page_number: *page,
                    page_size: *page_size,
                };
                let list = self.block_on(workspaces.list_with_options(organization, &options))?;
                render(format, &list, |l| format_workspace_list_text(organization, l))
            }
            WorkspaceCommands::Show {
                organization,
                name,
                format,
            } => {
                let ws = self.block_on(workspaces.get(organization, name))?;
                render(format, &ws, format_workspace_show_text)
            }
            WorkspaceCommands::Create {
                organization,
                name,
                auto_apply,
                terraform_version,
                working_directory,
                format,
            } => {
                let input = CreateWorkspaceInput {
                    auto_apply: *auto_apply,
                    terraform_version: terraform_version.clone(),
                    working_directory: working_directory.clone(),
                    ..CreateWorkspaceInput::new(organization.as_str(), name.as_str())
                };
                let ws = self.block_on(workspaces.create(&input))?;
                render(format, &ws, format_workspace_show_text)
            }
            WorkspaceCommands::Modify {
                organization,
                name,
                rename,
                auto_apply,
                terraform_version,
                working_directory,
                format,
            } => {
                let input = ModifyWorkspaceInput {
                    rename: rename.clone(),
                    auto_apply: *auto_apply,
                    terraform_version: terraform_version.clone(),
                    working_directory: working_directory.clone(),
                    ..ModifyWorkspaceInput::new(organization.as_str(), name.as_str())
                };
                let ws = self.block_on(workspaces.modify(&input))?;
                render(format, &ws, format_workspace_show_text)
            }
            WorkspaceCommands::Delete {
                organization,
                name,
                yes,
            } => {
                let prompt = format!("Delete workspace '{}/{}'?", organization, name);
                if !*yes && !confirm(&prompt)? {
                    return Ok("Deletion cancelled".to_string());
                }
                self.block_on(workspaces.delete(&DeleteWorkspaceInput::new(
                    organization.as_str(),
                    name.as_str(),
                )))?;
                Ok(format!("Deleted workspace: {}/{}", organization, name))
            }
        }
    }
}

fn confirm(prompt: &str) -> Result<bool, ApiError> {
    use dialoguer::Confirm;
    Confirm::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))
}

/// Render `value` as pretty JSON when asked, otherwise through `text`.
fn render<T, F>(format: &str, value: &T, text: F) -> Result<String, ApiError>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        "json" => serde_json::to_string_pretty(value).map_err(|e| ApiError::Encode(e.to_string())),
        "text" => Ok(text(value)),
        other => {
            debug!(format = %other, "Unknown output format, falling back to text");
            Ok(text(value))
        }
    }
}
