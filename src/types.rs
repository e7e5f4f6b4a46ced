//! Core types shared by the organization and workspace resources.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decoded capability map of a resource.
///
/// The service reports flags such as `can-destroy` or `can-update`; lookups
/// accept either the bare action (`destroy`) or the full key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(BTreeMap<String, bool>);

impl Permissions {
    /// Whether the caller may perform `action`. Unknown actions are denied.
    pub fn can(&self, action: &str) -> bool {
        let action = action.trim();
        if action.starts_with("can-") {
            return self.0.get(action).copied().unwrap_or(false);
        }
        self.0
            .get(&format!("can-{}", action))
            .copied()
            .unwrap_or(false)
    }

    /// Allowed actions, without the `can-` prefix, in key order.
    pub fn allowed(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, allowed)| **allowed)
            .map(|(key, _)| key.strip_prefix("can-").unwrap_or(key))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Permissions {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Page selection forwarded to list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListOptions {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(number) = self.page_number {
            pairs.push(("page[number]", number.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page[size]", size.to_string()));
        }
        pairs
    }
}

/// A required string field counts as present only when non-empty.
pub(crate) fn required(
    value: Option<&str>,
    missing: ValidationError,
) -> Result<&str, ValidationError> {
    value.filter(|v| !v.is_empty()).ok_or(missing)
}

/// `(organization, name)` lookup key; organization is checked first.
pub(crate) fn workspace_key<'a>(
    organization: Option<&'a str>,
    name: Option<&'a str>,
) -> Result<(&'a str, &'a str), ValidationError> {
    let organization = required(organization, ValidationError::OrganizationRequired)?;
    let name = required(name, ValidationError::NameRequired)?;
    Ok((organization, name))
}
