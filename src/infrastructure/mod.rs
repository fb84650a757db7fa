//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod traits;
pub mod xml;

pub use error::InfraError;
pub use xml::{XmlCodec, XmlError};
