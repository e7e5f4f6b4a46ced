//! Format workspaces as text.

use crate::workspace::types::Workspace;
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Format a workspace listing as a table.
pub fn format_workspace_list_text(organization: &str, workspaces: &[Workspace]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Workspaces in {}", organization))
    ));
    if workspaces.is_empty() {
        out.push_str("No workspaces found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "ID", "Terraform", "Auto apply", "Locked"]);
    for ws in workspaces {
        table.add_row(vec![
            ws.name.clone(),
            ws.id.clone(),
            ws.terraform_version.clone(),
            yes_no(ws.auto_apply).to_string(),
            yes_no(ws.locked).to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\nTotal: {} workspace(s)\n", table, workspaces.len()));
    out
}

/// Format a single workspace as a key/value table.
pub fn format_workspace_show_text(ws: &Workspace) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec!["ID", ws.id.as_str()]);
    table.add_row(vec!["Name", ws.name.as_str()]);
    table.add_row(vec![
        "Organization",
        ws.organization.as_deref().unwrap_or("-"),
    ]);
    table.add_row(vec!["Terraform version", ws.terraform_version.as_str()]);
    table.add_row(vec![
        "Working directory",
        ws.working_directory.as_deref().unwrap_or("(root)"),
    ]);
    table.add_row(vec!["Auto apply", yes_no(ws.auto_apply)]);
    table.add_row(vec!["Locked", yes_no(ws.locked)]);
    if !ws.environment.is_empty() {
        table.add_row(vec!["Environment", ws.environment.as_str()]);
    }
    let created = ws
        .created_at
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());
    table.add_row(vec!["Created", created.as_str()]);
    let allowed: Vec<&str> = ws.permissions.allowed().collect();
    let permissions = if allowed.is_empty() {
        "-".to_string()
    } else {
        allowed.join(", ")
    };
    table.add_row(vec!["Permissions", permissions.as_str()]);

    format!(
        "{}\n\n{}\n",
        format_section_heading(&format!("Workspace {}", ws.name)),
        table
    )
}
