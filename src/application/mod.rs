//! Application layer: the step interpreter and the navigator service
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod parser;
pub mod pipeline;
pub mod services;
pub mod step;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use parser::parse_steps;
pub use pipeline::{Outcome, Pipeline};
pub use step::{Step, StepContext};
