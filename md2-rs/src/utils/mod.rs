//! Shared utilities for the md2-rs CLI

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;
