//! CLI library components for the `nlpf` preprocessing tool.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
