//! Deduplication engine: scans every package's install root, groups the
//! installations by dependency name, rejects version mismatches, picks one
//! owning package per shared dependency, and deletes the other copies.

pub mod aggregate;
pub mod engine;
pub mod owner;
pub mod remover;
pub mod scanner;
pub mod validate;
