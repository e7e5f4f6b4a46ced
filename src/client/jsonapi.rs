//! JSON:API document envelopes used on the wire.

use serde::{Deserialize, Serialize};

/// Response document wrapping one resource or an array of them.
#[derive(Debug, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

/// Response resource object.
#[derive(Debug, Deserialize)]
pub struct Resource<A, R = NoRelationships> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
    #[serde(default)]
    pub relationships: R,
}

/// Placeholder for resources whose relationships are not decoded.
#[derive(Debug, Default, Deserialize)]
pub struct NoRelationships {}

/// To-one relationship: `{"data": {"id": ..., "type": ...}}`.
#[derive(Debug, Default, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

/// Linked resource; only the id is kept, the type is implied by the field.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
}

/// Request document: `{"data": {"type": ..., "attributes": {...}}}`.
#[derive(Debug, Serialize)]
pub struct RequestDocument<A> {
    pub data: RequestResource<A>,
}

#[derive(Debug, Serialize)]
pub struct RequestResource<A> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: A,
}

impl<A: Serialize> RequestDocument<A> {
    pub fn new(kind: &'static str, attributes: A) -> Self {
        Self {
            data: RequestResource { kind, attributes },
        }
    }
}

/// Error document returned with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorDocument {
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorObject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorDocument {
    /// Messages of all errors, one per line; detail preferred over title.
    pub fn message(&self) -> Option<String> {
        let lines: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| {
                e.detail
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .or(e.title.as_deref())
            })
            .filter(|m| !m.is_empty())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}
