//! Copy-on-write mutation of tree-shaped values at property paths.
//!
//! A property path is a `.`-separated list of keys, each optionally followed
//! by one `[index]`, e.g. `users[2].address.city`. [`update`] and [`remove`]
//! never touch their input: they deep-copy it, walk the copy along the path
//! creating missing mappings and sequences on the way, and apply the change
//! at the last segment.
//!
//! # Example
//!
//! ```
//! use path_mutator::{get, remove, update, Tree};
//! use serde_json::json;
//!
//! let doc = Tree::from(json!({"user": {"name": "ada"}}));
//!
//! let updated = update(&doc, "user.tags[1]", Tree::from("admin")).unwrap();
//! assert_eq!(get(&updated, "user.tags[1]"), Some(&Tree::from("admin")));
//!
//! let removed = remove(&updated, "user.name").unwrap();
//! assert_eq!(get(&removed, "user.name"), None);
//!
//! // The input is untouched.
//! assert_eq!(get(&doc, "user.name"), Some(&Tree::from("ada")));
//! ```

pub mod cli;
pub mod error;
pub mod get;
pub mod options;
pub mod path;
pub mod remove;
pub mod tree;
pub mod update;
mod walk;

pub use error::{CloneError, KindMismatch, MutateError};
pub use get::{get, get_path};
pub use options::MutateOptions;
pub use path::{parse_segment, ParsedSegment, PropertyPath};
pub use remove::{remove, remove_with};
pub use tree::{Mapping, Scalar, Sequence, Tree, TreeKind, MAX_TREE_DEPTH};
pub use update::{update, update_with};
