// src/vector/unsafe_ops.rs
//! Unchecked (unsafe) slot access for maximum performance

use super::core::Vector;
use zeroize::DefaultIsZeroes;

impl<T: DefaultIsZeroes> Vector<T> {
    /// Reads slot `index` without bounds checking.
    ///
    /// Slots between `len` and `capacity` are readable and hold zero.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.capacity()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        debug_assert!(
            index < self.data.len(),
            "get_unchecked: index {} >= capacity {}",
            index,
            self.data.len()
        );

        unsafe { *self.data.get_unchecked(index) }
    }

    /// Writes slot `index` without bounds checking.
    ///
    /// Does not move the high-water mark; see [`put`](Self::put) for that.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.capacity()`.
    #[inline(always)]
    pub unsafe fn put_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(
            index < self.data.len(),
            "put_unchecked: index {} >= capacity {}",
            index,
            self.data.len()
        );

        unsafe { *self.data.get_unchecked_mut(index) = value };
    }
}
