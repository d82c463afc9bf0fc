//! CLI command implementations.

pub mod build;
pub mod common;
pub mod demo;
pub mod verify;
pub mod version;
