//! Domain layer: the attributed document tree
//!
//! This layer is independent of external concerns (no I/O, no XML, no CLI).

pub mod error;
pub mod tree;
pub mod value;

pub use error::{DomainError, DomainResult};
pub use tree::{Document, Node, NodeId};
pub use value::Value;
