// src/error.rs
//! Error types for vector operations

use std::fmt;

/// Errors that can occur during vector operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Index is not below the number of occupied slots
    IndexOutOfRange {
        /// Requested slot index
        index: usize,
        /// Occupied slot count at the time of the request
        len: usize,
    },
    /// Requested storage exceeds the configured maximum (or overflows `usize`)
    SizeTooBig {
        /// Requested slot count
        requested: usize,
        /// Largest slot count the vector may hold
        max: usize,
    },
    /// The allocator refused to provide the requested storage
    AllocationFailed,
    /// Element slice length differs from the vector's element size
    ElementSizeMismatch {
        /// Element size fixed at creation
        expected: usize,
        /// Length of the slice that was supplied
        actual: usize,
    },
    /// Element size of zero bytes requested for a raw vector
    ZeroElementSize,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            Self::SizeTooBig { requested, max } => {
                write!(f, "Capacity {} exceeds maximum {}", requested, max)
            }
            Self::AllocationFailed => write!(f, "Allocation failed"),
            Self::ElementSizeMismatch { expected, actual } => write!(
                f,
                "Element size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            Self::ZeroElementSize => write!(f, "Element size must be non-zero"),
        }
    }
}

impl std::error::Error for VectorError {}

impl From<std::collections::TryReserveError> for VectorError {
    fn from(_: std::collections::TryReserveError) -> Self {
        VectorError::AllocationFailed
    }
}

/// Convert VectorError to std::io::Error
impl From<VectorError> for std::io::Error {
    fn from(err: VectorError) -> Self {
        use std::io::ErrorKind;
        match err {
            VectorError::AllocationFailed => std::io::Error::new(ErrorKind::OutOfMemory, err),
            VectorError::IndexOutOfRange { .. } => {
                std::io::Error::new(ErrorKind::UnexpectedEof, err)
            }
            VectorError::ElementSizeMismatch { .. } | VectorError::ZeroElementSize => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            _ => std::io::Error::other(err),
        }
    }
}

/// Convert VectorError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<VectorError> for anyhow::Error {
    fn from(err: VectorError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Result type alias for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}
