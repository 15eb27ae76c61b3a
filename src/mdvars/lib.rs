//! # Mdvars Architecture
//!
//! Mdvars is a **variable-substitution pass for parsed document trees**. A
//! host pipeline parses markdown into a tree, hands each document's path and
//! root node to this crate, and gets back a tree in which every `^{name}`
//! placeholder token has been replaced with the value configured for that
//! document. It is one stage in someone else's pipeline: parsing, rendering,
//! and plugin sequencing all live in the host.
//!
//! ## Flow
//!
//! ```text
//! host pipeline
//!   │  document path + root node
//!   ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Gate (api.rs)                                          │
//! │  - derives (group, document name) from the path         │
//! │  - the only component that can fail (malformed path)    │
//! └─────────────────────────────────────────────────────────┘
//!   │                                  │
//!   ▼                                  ▼
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │  Resolver (config.rs) │   │  Rewriter (rewrite.rs)    │
//! │  - group → document   │──▶│  - depth-first traversal  │
//! │    → variable mapping │   │  - literal replace-all    │
//! │  - miss = pass-through│   │    per entry, in order    │
//! └───────────────────────┘   └───────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Absence is not an error.** Most documents have no variables
//!   configured; the gate returns their trees untouched without traversing
//!   them. Unresolved placeholders stay in the text as literals. The single
//!   surfaced error is a document path the host's convention cannot parse.
//! - **No hidden state.** The [`VariableStore`] is loaded once and passed
//!   into [`Substituter::new`]; nothing global, so tests build stores from
//!   string fixtures.
//! - **Order is part of the contract.** Variable mappings keep their
//!   configured insertion order, and substitution applies entries in that
//!   order — a later entry may rewrite text introduced by an earlier one.
//!   See `rewrite.rs` for the details.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`Substituter`] gate — entry point for the host
//! - [`config`]: Configuration store and variable lookup
//! - [`model`]: The document tree [`Node`]
//! - [`identity`]: Path → (group, document name) derivation
//! - [`rewrite`]: Placeholder token and tree rewriting
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod model;
pub mod rewrite;

pub use api::Substituter;
pub use config::{VariableMap, VariableStore};
pub use error::{MdvarsError, Result};
pub use identity::DocumentIdentity;
pub use model::Node;
