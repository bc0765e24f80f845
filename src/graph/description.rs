//! Serializable graph descriptions.
//!
//! A description is the unbranded, index-based form of a graph, suitable for
//! JSON fixtures and command-line input:
//!
//! ```json
//! { "vertices": [ { "value": 1, "neighbors": [1] }, { "value": 2 } ] }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::TraversalError;

/// One vertex of a [`GraphDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexDescription<T> {
    /// The vertex's value.
    pub value: T,
    /// Indices of outgoing neighbors, in order.
    #[serde(default)]
    pub neighbors: Vec<usize>,
}

/// An index-addressed description of a directed graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription<T> {
    /// Vertices in id order.
    pub vertices: Vec<VertexDescription<T>>,
}

impl<T> GraphDescription<T> {
    /// Checks that every neighbor index names an existing vertex.
    ///
    /// # Errors
    /// Returns the first [`TraversalError::DanglingNeighbor`] found.
    pub fn validate(&self) -> Result<(), TraversalError> {
        let len = self.vertices.len();
        for (vertex, v) in self.vertices.iter().enumerate() {
            if let Some(&neighbor) = v.neighbors.iter().find(|&&n| n >= len) {
                return Err(TraversalError::DanglingNeighbor { vertex, neighbor });
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON description.
    ///
    /// # Errors
    /// Returns [`TraversalError::Json`] for malformed text and
    /// [`TraversalError::DanglingNeighbor`] for broken neighbor indices.
    pub fn from_json(text: &str) -> Result<Self, TraversalError>
    where
        T: DeserializeOwned,
    {
        let description: Self = serde_json::from_str(text)?;
        description.validate()?;
        Ok(description)
    }

    /// Renders the description as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`TraversalError::Json`] if a value fails to serialize.
    pub fn to_json(&self) -> Result<String, TraversalError>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
