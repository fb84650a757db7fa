//! Application services

pub mod navigator;

pub use navigator::{NavigatorService, RunReport};
