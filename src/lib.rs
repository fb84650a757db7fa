//! vtcli: navigate and edit attributed XML trees from scripts.
//!
//! A command line is split into the document path and a chain of steps.
//! [`application::parse_steps`] turns the raw tokens into [`application::Step`]s,
//! [`application::Pipeline`] folds them over a [`domain::Document`], and the
//! [`application::services::NavigatorService`] writes the document back only
//! when a step changed it and the whole chain succeeded.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
