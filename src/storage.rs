// src/storage.rs
//! Slot storage helpers shared by [`Vector`](crate::Vector) and
//! [`RawVector`](crate::RawVector)

use crate::error::{Result, VectorError};
use zeroize::{DefaultIsZeroes, Zeroize};

/// Capacity a push should grow to, given `top` occupied of `capacity` slots.
///
/// Returns `capacity` unchanged when a free slot remains. Growth doubles
/// (0 becomes 1) once at most one free slot is left, clamped to `max_slots`.
///
/// # Errors
///
/// Returns [`VectorError::SizeTooBig`] when no slot can be made free.
pub(crate) fn push_target(capacity: usize, top: usize, max_slots: usize) -> Result<usize> {
    if top + 1 < capacity {
        return Ok(capacity);
    }
    let target = capacity.saturating_mul(2).max(1).min(max_slots);
    if target <= top {
        return Err(VectorError::SizeTooBig {
            requested: top.saturating_add(1),
            max: max_slots,
        });
    }
    Ok(target.max(capacity))
}

/// Moves the first `keep` elements of `data` into a fresh block of exactly
/// `new_len` elements, zero-filling the rest.
///
/// The old block is wiped before it is released, so no copy of the kept
/// elements is left behind in freed memory. `data` is unchanged on error.
pub(crate) fn relocate<T: DefaultIsZeroes>(
    data: &mut Vec<T>,
    keep: usize,
    new_len: usize,
) -> Result<()> {
    debug_assert!(keep <= new_len && keep <= data.len());

    let mut fresh = Vec::new();
    fresh.try_reserve_exact(new_len)?;
    fresh.extend_from_slice(&data[..keep]);
    fresh.resize(new_len, T::default());

    let mut old = std::mem::replace(data, fresh);
    // Vec::zeroize also wipes spare capacity; the old block is dropped next.
    old.zeroize();
    Ok(())
}
