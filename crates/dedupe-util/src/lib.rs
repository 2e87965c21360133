//! Shared utilities for the dedupe tool.
//!
//! This crate provides cross-cutting concerns used by all other dedupe crates:
//! error types, filesystem helpers, process spawning, terminal status output,
//! and the log sink the engine reports through.

pub mod errors;
pub mod fs;
pub mod log;
pub mod process;
pub mod progress;
