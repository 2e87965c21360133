//! Core data types for the dedupe tool.
//!
//! This crate defines the typed inputs of the deduplication engine: the
//! workspace descriptor and its package directories, installed dependency
//! manifests, the per-installation records produced by scanning, and the
//! optional `.dedupe.toml` configuration.
//!
//! Everything here is read-only with respect to the filesystem.

pub mod config;
pub mod manifest;
pub mod record;
pub mod workspace;
