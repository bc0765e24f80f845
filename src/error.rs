//! Error type shared by graph construction and traversal.

use core::fmt;

/// Which end of a path query was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The vertex the path starts at.
    Start,
    /// The vertex the path must reach.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Errors reported by `vertexwalk`.
///
/// An absent start vertex is *not* an error for the set-producing traversals;
/// it simply yields an empty result. Only the path query treats a missing
/// endpoint as caller misuse.
#[derive(Debug)]
pub enum TraversalError {
    /// A path query was given no vertex for one of its endpoints.
    MissingEndpoint(Endpoint),
    /// A graph description lists a neighbor index with no matching vertex.
    DanglingNeighbor {
        /// Index of the vertex whose neighbor list is broken.
        vertex: usize,
        /// The out-of-range neighbor index.
        neighbor: usize,
    },
    /// A graph description could not be parsed or rendered as JSON.
    Json(serde_json::Error),
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalError::MissingEndpoint(endpoint) => {
                write!(f, "invalid argument: {endpoint} vertex is absent")
            }
            TraversalError::DanglingNeighbor { vertex, neighbor } => {
                write!(f, "vertex {vertex} lists neighbor {neighbor}, which does not exist")
            }
            TraversalError::Json(err) => write!(f, "malformed graph description: {err}"),
        }
    }
}

impl std::error::Error for TraversalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TraversalError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TraversalError {
    fn from(err: serde_json::Error) -> Self {
        TraversalError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_endpoint_names_the_side() {
        let err = TraversalError::MissingEndpoint(Endpoint::End);
        assert_eq!(err.to_string(), "invalid argument: end vertex is absent");
        assert!(err.source().is_none());
    }

    #[test]
    fn json_errors_expose_their_source() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = TraversalError::from(parse);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("malformed graph description"));
    }
}
