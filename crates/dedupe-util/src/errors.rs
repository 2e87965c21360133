use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all dedupe operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DedupeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The workspace descriptor does not exist at the expected location.
    #[error("Workspace descriptor not found at {}", path.display())]
    #[diagnostic(help("Run dedupe from inside a workspace, or pass --root"))]
    MissingDescriptor { path: PathBuf },

    /// The descriptor has no default package, or more than one.
    #[error("No default package: {reason}")]
    #[diagnostic(help("Mark exactly one entry in packageDirectories with \"default\": true"))]
    NoDefaultPackage { reason: String },

    /// Sub-projects hold different versions of the same dependency.
    ///
    /// `details` holds one `<package>: <version> (<path>)` line per installation.
    #[error(
        "Version mismatch for dependency '{dependency}':\n{details}\n\
         Install the same version of '{dependency}' in every package and run again"
    )]
    #[diagnostic(help("No installations were removed"))]
    VersionMismatch { dependency: String, details: String },

    /// Invalid or malformed workspace descriptor or dependency manifest.
    #[error("Manifest error: {message}")]
    Manifest { message: String },

    /// Invalid `.dedupe.toml`.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check .dedupe.toml for syntax errors"))]
    Config { message: String },

    /// Walking an install root failed.
    #[error("Scan failed: {message}")]
    Scan { message: String },

    /// Deleting a redundant installation failed.
    #[error("Failed to remove {}: {source}", path.display())]
    Removal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external process exited unsuccessfully.
    #[error("Process failed: {message}")]
    Process { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
