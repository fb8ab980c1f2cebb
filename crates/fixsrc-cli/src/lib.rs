//! Command-line driver for the fixsrc fixture analyzer.

pub mod args;
pub mod config;
pub mod driver;
pub mod fs;
pub mod reporter;
