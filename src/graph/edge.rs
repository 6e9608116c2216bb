use super::property::{Properties, PropertyValue};
use super::VertexId;
use serde::{Deserialize, Serialize};

/// One side of a directed edge, as stored on a vertex
///
/// The direction is implied by the partition of the owning vertex the edge
/// lives in; `vertex_id` is always the *other* endpoint. Field order matters:
/// the derived ordering sorts by endpoint first, then label, then properties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub vertex_id: VertexId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl Edge {
    pub fn new(label: impl Into<String>, vertex_id: VertexId) -> Self {
        Self {
            vertex_id,
            label: label.into(),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Copy of this edge as seen from the other endpoint, pointing back at `owner`
    pub fn reciprocal(&self, owner: VertexId) -> Self {
        Self {
            vertex_id: owner,
            label: self.label.clone(),
            properties: self.properties.clone(),
        }
    }
}
