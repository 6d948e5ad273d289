use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build scripts to tell a rejected invocation apart
/// from a resolution that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the exclusion set was computed (possibly empty)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unresolvable bundle, missing manifest, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for exclusion resolution.
///
/// The first four variants are the fatal conditions of the resolver; any of
/// them aborts the whole run so that packaging never proceeds with an
/// incomplete exclusion set.
#[derive(Debug, Error)]
pub enum ShadeDiffError {
    #[error("Could not resolve shaded jar artifact to exclude: {reference}\nDetails: {details}\n\n💡 Hint: Make sure the shaded jar has been built and installed into the repository")]
    ReferenceUnresolvable { reference: String, details: String },

    #[error("No contents entry found in {archive}\nLooked for: {expected}\n\n💡 Hint: The shaded jar was probably not built correctly; rebuild it so that it records the artifacts it includes")]
    ManifestMissing { archive: String, expected: String },

    #[error("Failed to read manifest entry '{entry}' from {archive}\nDetails: {details}\n\n💡 Hint: Please verify that the archive is not corrupted")]
    ManifestUnreadable {
        archive: String,
        entry: String,
        details: String,
    },

    #[error("Malformed manifest entry '{entry}' in {archive}\nDetails: {details}\n\n💡 Hint: Please verify that the archive was produced by a supported shading tool")]
    MalformedEntry {
        archive: String,
        entry: String,
        details: String,
    },

    #[error("Dependency list not found: {path}\n\n💡 Hint: {suggestion}")]
    DependencyListNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency list: {path}\nDetails: {details}\n\n💡 Hint: Generate the list with `mvn dependency:list -DoutputFile=<file>`")]
    DependencyListParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for value objects and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
