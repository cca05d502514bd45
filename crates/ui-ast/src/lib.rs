//! # UI AST
//!
//! Builds UI description trees for a remote renderer and serializes them to JSON.
//!
//! ## Architectural Principles
//!
//! - **Construction only:** trees are built bottom-up from constructor functions
//!   and handed to the serializer. Nothing here parses, renders, or persists.
//! - **Closed value model:** `DynamicValue` has exactly five variants, so every
//!   attribute and table cell has a JSON form by construction.
//! - **Sparse emission:** empty `props`/`children` are omitted, never emitted
//!   empty.
//!
//! ## Public API
//!
//! - `DynamicValue`, `Props`, `props`: the value model.
//! - `Node`, `element`, `text`, `none`: the tree and its generic constructors.
//! - `tags`: the named tag catalog (`tags::html`, `tags::recharts`, `tags::components`).
//! - `to_json`, `node_to_json`, `stringify`: JSON emission.

pub mod error;
pub mod node;
pub mod serialize;
pub mod tags;
pub mod value;

pub use error::ValueError;
pub use node::{Node, TEXT_NODE, element, none, text};
pub use serialize::{node_to_json, stringify, to_json};
pub use value::{DynamicValue, Props, props};
