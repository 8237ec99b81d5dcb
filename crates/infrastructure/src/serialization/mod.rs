//! Deterministic JSON serialization of schemas and state.
//!
//! Object keys come out sorted (via `BTreeMap` in domain types), with
//! 2-space indentation and a trailing newline.

mod json;

pub use json::*;
