use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdxError {
    /// Bad magic bytes, a header cut short, or dimensions that cannot be
    /// represented in memory.
    #[error("invalid IDX header: {0}")]
    HeaderInvalid(String),

    /// Type tag outside the six known element encodings.
    #[error("unknown data type tag 0x{0:02X}")]
    UnknownType(u8),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload ended before the declared element count was reached.
    #[error("payload truncated: expected {expected} elements, decoded {decoded}")]
    Truncated { expected: usize, decoded: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IdxError>;
