//! Format organizations as text.

use crate::organization::types::Organization;
use crate::workspace::format::format_section_heading;
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::Table;

fn minutes(value: Option<u32>) -> String {
    value
        .map(|m| format!("{} min", m))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_organization_list_text(organizations: &[Organization]) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Organizations"));
    if organizations.is_empty() {
        out.push_str("No organizations found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Email", "Session timeout"]);
    for org in organizations {
        table.add_row(vec![
            org.name.clone(),
            org.email.clone(),
            minutes(org.session_timeout),
        ]);
    }
    out.push_str(&format!(
        "{}\n\nTotal: {} organization(s)\n",
        table,
        organizations.len()
    ));
    out
}

pub fn format_organization_show_text(org: &Organization) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec!["Name".to_string(), org.name.clone()]);
    table.add_row(vec!["Email".to_string(), org.email.clone()]);
    table.add_row(vec!["Session timeout".to_string(), minutes(org.session_timeout)]);
    table.add_row(vec!["Session remember".to_string(), minutes(org.session_remember)]);
    table.add_row(vec![
        "Auth policy".to_string(),
        org.collaborator_auth_policy
            .clone()
            .unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Created".to_string(),
        org.created_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "-".to_string()),
    ]);
    format!(
        "{}\n\n{}\n",
        format_section_heading(&format!("Organization {}", org.name)),
        table
    )
}
