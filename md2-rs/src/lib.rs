//! md2-rs library
//!
//! Command implementations behind the `md2-rs` binary.

pub mod cli;
pub mod commands;
pub mod utils;
