use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort a write request.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A required input was empty or not supplied at all.
    #[error("Input required and not supplied: {0}")]
    #[diagnostic(code(write_file::missing_input))]
    MissingInput(&'static str),

    #[error("Mode must be one of: append, overwrite, preserve, prepend")]
    #[diagnostic(
        code(write_file::invalid_mode),
        help("modes are matched case-insensitively")
    )]
    InvalidMode(String),

    /// A filesystem call failed while handling the request.
    #[error("{}", fs_message(.phase, .failure))]
    #[diagnostic(code(write_file::filesystem))]
    Filesystem { phase: Phase, failure: FsFailure },
}

impl Error {
    pub fn fs(phase: Phase, failure: FsFailure) -> Self {
        Self::Filesystem { phase, failure }
    }
}

fn fs_message(phase: &Phase, failure: &FsFailure) -> String {
    failure
        .message()
        .unwrap_or_else(|| phase.fallback())
        .to_owned()
}

/// The step of a request a filesystem failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Checking whether the target exists in preserve mode
    PreserveCheck,
    Write,
}

impl Phase {
    pub fn fallback(&self) -> &'static str {
        match self {
            Phase::PreserveCheck => "Failed to check if file exists in preserve mode",
            Phase::Write => "Failed to write to file",
        }
    }
}

/// Classification of a failed filesystem call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsFailure {
    NotFound(String),
    Os(String),
    /// The error carried no usable message
    Unclassified,
}

impl FsFailure {
    /// Classifies an io error raised while performing `action`.
    pub fn from_io(err: io::Error, action: &str) -> Self {
        let message = err.to_string();

        if message.trim().is_empty() {
            return Self::Unclassified;
        }
        let message = format!("{action}: {message}");

        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(message),
            _ => Self::Os(message),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FsFailure::NotFound(m) | FsFailure::Os(m) => Some(m),
            FsFailure::Unclassified => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsFailure::NotFound(_))
    }
}
