//! CLI command implementations.

pub mod common;
pub mod resources;
pub mod search;
pub mod version;
