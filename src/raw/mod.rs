// src/raw/mod.rs
//! Type-erased vector over fixed-size byte slots

pub mod vector;

pub use self::vector::RawVector;
