//! The abstract request shape the [`crate::projector`] consumes.

use crate::enums::{OpType, ResourceType};

/// An ordered, case-exact mapping from header name to textual value.
///
/// A plain `Vec` of pairs rather than a `HashMap`: the input is small
/// (typically a few dozen headers), insertion order doesn't matter for
/// lookups (the projector looks up by exact name), and preserving the
/// caller's order makes test fixtures easy to read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Headers::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Case-exact lookup, per the spec: the input map is produced by the
    /// SDK and uses canonical casing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Headers {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Headers {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A generic request to be projected into a [`crate::stream::HeaderStream`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub operation_type: OpType,
    pub resource_type: ResourceType,
    pub resource_id: Option<String>,
    pub resource_address: String,
    pub is_name_based: bool,
    pub replica_path: String,
    pub content: Option<Vec<u8>>,
    pub headers: Headers,
    pub continuation: Option<String>,
}

impl Request {
    /// Construct a request with no payload, no continuation, and an empty
    /// header map, leaving the caller to fill in what it needs.
    pub fn new(
        operation_type: OpType,
        resource_type: ResourceType,
        resource_address: impl Into<String>,
        replica_path: impl Into<String>,
    ) -> Self {
        Request {
            operation_type,
            resource_type,
            resource_id: None,
            resource_address: resource_address.into(),
            is_name_based: false,
            replica_path: replica_path.into(),
            content: None,
            headers: Headers::new(),
            continuation: None,
        }
    }
}
