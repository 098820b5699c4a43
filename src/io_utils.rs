use std::fmt;
use std::io;
use std::path::Path;

use crate::IdxError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        _ => "Check that the file is readable.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a decoder error into a CLI error with a hint. I/O failures get the
/// path-aware message from [`format_io_error`].
pub fn idx_cli_error(operation: &str, path: &Path, err: IdxError) -> CliError {
    match err {
        IdxError::Io(io) => io_cli_error(operation, path, io),
        other => CliError {
            msg: format!("Error {} '{}': {}", operation, path.display(), cli_hint(&other)),
            source: Some(Box::new(other)),
        },
    }
}

/// Return an actionable hint for a decoder error variant.
pub fn cli_hint(err: &IdxError) -> String {
    use crate::IdxError::*;
    match err {
        HeaderInvalid(msg) => format!("{msg}. Are you sure this is an IDX file?"),
        UnknownType(tag) => format!(
            "unknown data type 0x{tag:02X}. Are you sure this is an IDX file?"
        ),
        Io(io) => format!("{io}"),
        Truncated { expected, decoded } => format!(
            "file ends after {decoded} of {expected} elements. \
             Re-download the file or pass --allow-truncated."
        ),
    }
}
