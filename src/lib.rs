// src/lib.rs
//! # Growable Slot Vectors
//!
//! Growable arrays of fixed-size slots with a high-water mark, indexed
//! writes that extend the vector, and zeroed memory everywhere outside the
//! occupied slots.
//!
//! Features:
//! - Typed [`Vector<T>`] for any `Copy` type whose default is all-zero bytes
//! - Type-erased [`RawVector`] for records whose size is only known at runtime
//! - Unused tail slots always read as zero, including after growth or shrink
//! - Secure memory wiping using `zeroize` on clear, resize, free, and drop
//! - Typed errors for oversize growth and allocation failure
//!
//! Vectors are single-owner and not internally synchronized; wrap them in a
//! lock to share across threads. Growth may move the storage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod raw;
pub(crate) mod storage;
pub mod vector;

// Re-export main types
pub use config::{VEC_MAX_BYTES, VectorConfig};
pub use error::{Result, ResultExt, VectorError};
pub use raw::RawVector;
pub use vector::Vector;

/// Commonly used imports.
pub mod prelude {
    pub use crate::config::VectorConfig;
    pub use crate::error::{Result, ResultExt, VectorError};
    pub use crate::raw::RawVector;
    pub use crate::vector::Vector;
    pub use zeroize::DefaultIsZeroes;
}
