//! # grove-core
//!
//! An in-memory, schema-less hierarchical value tree — a JSON-like document
//! model for configuration, save-game state, and message payloads. Node
//! names and string payloads are bounded (27 / 63 visible characters,
//! truncate-on-overflow), so a document's memory layout stays predictable
//! and no node allocates per-field strings of unbounded size.
//!
//! Two cursor kinds navigate the tree:
//!
//! - [`WriteCursor`] creates missing structure on demand — navigation never
//!   fails, which makes authoring code linear and check-free.
//! - [`ReadCursor`] never creates anything — a missing child puts it in an
//!   explicit invalid state that one `to_parent` recovers from.
//! - [`LenientReadCursor`] layers an error-depth counter on a reader so a
//!   chain of optional descents can be unwound later, with default-taking
//!   accessors for tolerant config reads.
//!
//! Nodes live in a generational arena: [`NodeHandle`]s captured from a
//! cursor stay valid across appends and inserts, and deletions make them
//! *detectably* stale instead of dangling.
//!
//! ## Quick start
//!
//! ```rust
//! use grove_core::Tree;
//!
//! let mut tree = Tree::new();
//! let mut writer = tree.write_cursor();
//! writer.to_child("count"); // created on demand
//! writer.write(3);
//! writer.to_parent().to_child("label");
//! writer.write("ok");
//! drop(writer);
//!
//! let mut reader = tree.read_cursor();
//! reader.to_child("count");
//! assert_eq!(reader.query_int(), Some(3));
//! reader.to_parent().to_child("missing");
//! assert!(!reader.is_valid());
//! reader.to_parent(); // recovers at the root
//! assert!(reader.is_valid());
//! ```
//!
//! ## Modules
//!
//! - [`tree`] — [`Tree`]: root ownership, cursor factories, structural ops
//! - [`writer`] — [`WriteCursor`], the authoring interface
//! - [`reader`] — [`ReadCursor`], strict navigation
//! - [`lenient`] — [`LenientReadCursor`], best-effort extraction
//! - [`node`] / [`value`] — [`Node`] and its typed payload
//! - [`bounded`] — bounded strings with the truncation contract
//! - [`json`] — JSON bridge driven entirely through the cursors
//! - [`error`] — [`TreeError`] for the handle-level and JSON surfaces
//!
//! Trees are single-threaded by design; a write cursor borrows the tree
//! exclusively, so the borrow checker rules out cursor/mutation interleaving
//! within safe code.

mod arena;
mod cursor;

pub mod bounded;
pub mod error;
pub mod json;
pub mod lenient;
pub mod node;
pub mod reader;
pub mod tree;
pub mod value;
pub mod writer;

pub use arena::NodeHandle;
pub use bounded::{BoundedString, NAME_CAPACITY, STRING_CAPACITY};
pub use error::TreeError;
pub use lenient::LenientReadCursor;
pub use node::{Node, NodeName};
pub use reader::ReadCursor;
pub use tree::{Tree, MAX_DEPTH, ROOT_NAME};
pub use value::{PayloadString, Scalar, Value, ValueKind};
pub use writer::WriteCursor;
