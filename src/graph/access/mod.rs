//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so traversals can share the branded visited
//! set without exposing it as part of the public API surface.

pub(crate) mod visited;
