// src/vector/mod.rs
//! Typed growable vector implementation

pub mod core;
pub(crate) mod ops;
pub(crate) mod unsafe_ops;

pub use self::core::Vector;
