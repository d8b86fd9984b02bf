// src/vector/ops.rs
//! Vector push/get/put operations

use super::core::Vector;
use crate::error::{Result, VectorError};
use crate::storage;
use zeroize::DefaultIsZeroes;

impl<T: DefaultIsZeroes> Vector<T> {
    /// Appends `value` at slot `len` and returns the new length.
    ///
    /// Capacity doubles (0 grows to 1) when at most one free slot remains
    /// before the write, clamped to [`max_capacity`](Self::max_capacity).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeTooBig`] if the vector is full at its
    /// maximum capacity, or [`VectorError::AllocationFailed`] if growth fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use secvec::Vector;
    /// # use secvec::VectorError;
    ///
    /// let mut vec = Vector::<i64>::new(0);
    /// assert_eq!(vec.push(-1)?, 1);
    /// assert_eq!(vec.push(-2)?, 2);
    /// assert_eq!(vec.capacity(), 2);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn push(&mut self, value: T) -> Result<usize> {
        let capacity = self.data.len();
        let target = storage::push_target(capacity, self.top, self.max_slots)?;
        if target > capacity {
            self.resize(target)?;
        }
        unsafe {
            self.put_unchecked(self.top, value);
        }
        self.top += 1;
        Ok(self.top)
    }

    /// Returns a copy of slot `index`, or `None` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use secvec::Vector;
    /// # use secvec::VectorError;
    ///
    /// let mut vec = Vector::<u8>::new(4);
    /// vec.push(0xAB)?;
    /// assert_eq!(vec.get(0), Some(0xAB));
    /// assert_eq!(vec.get(1), None);
    /// # Ok::<(), VectorError>(())
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.top {
            return None;
        }
        Some(unsafe { self.get_unchecked(index) })
    }

    /// Like [`get`](Self::get), with a typed error for the miss.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<T> {
        self.get(index).ok_or(VectorError::IndexOutOfRange {
            index,
            len: self.top,
        })
    }

    /// Writes `value` at slot `index`, growing the vector if needed.
    ///
    /// When `index >= capacity` the vector grows to exactly `index + 1`
    /// slots. Slots skipped over between the old `len` and `index` read as
    /// zero. When `index >= len`, `len` becomes `index + 1`, so the slot just
    /// written is always readable: `put(len, x)` is observable like a push.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeTooBig`] if `index` is beyond
    /// [`max_capacity`](Self::max_capacity), or [`VectorError::AllocationFailed`]
    /// if growth fails. The vector is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use secvec::Vector;
    /// # use secvec::VectorError;
    ///
    /// let mut vec = Vector::<u64>::new(4);
    /// vec.put(10, 77)?;
    /// assert_eq!(vec.len(), 11);
    /// assert_eq!(vec.get(10), Some(77));
    /// assert_eq!(vec.get(9), Some(0));
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn put(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.data.len() {
            let needed = index.checked_add(1).ok_or(VectorError::SizeTooBig {
                requested: index,
                max: self.max_slots,
            })?;
            self.resize(needed)?;
        }
        unsafe {
            self.put_unchecked(index, value);
        }
        if index >= self.top {
            self.top = index + 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VectorConfig;

    #[test]
    fn test_push_growth_sequence() {
        let mut vec = Vector::<u32>::new(0);
        let mut caps = Vec::new();
        for i in 0..9 {
            vec.push(i).unwrap();
            caps.push(vec.capacity());
        }
        assert_eq!(caps, vec![1, 2, 4, 8, 8, 8, 8, 16, 16]);
        assert_eq!(vec.len(), 9);
    }

    #[test]
    fn test_push_grows_one_slot_early() {
        let mut vec = Vector::<u32>::new(4);
        vec.push(1).unwrap();
        vec.push(2).unwrap();
        vec.push(3).unwrap();
        assert_eq!(vec.capacity(), 4);

        // Three occupied, one free: grows before writing the fourth.
        vec.push(4).unwrap();
        assert_eq!(vec.capacity(), 8);
    }

    #[test]
    fn test_push_clamped_to_max() {
        let config = VectorConfig::default()
            .with_initial_capacity(2)
            .with_max_bytes(12);
        let mut vec = Vector::<u32>::with_config(config).unwrap();
        assert_eq!(vec.max_capacity(), 3);

        vec.push(1).unwrap();
        assert_eq!(vec.capacity(), 2);
        vec.push(2).unwrap();
        assert_eq!(vec.capacity(), 3);
        vec.push(3).unwrap();
        assert_eq!(vec.len(), 3);

        assert_eq!(
            vec.push(4),
            Err(VectorError::SizeTooBig {
                requested: 4,
                max: 3
            })
        );
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.get(2), Some(3));
    }

    #[test]
    fn test_try_get() {
        let mut vec = Vector::<u32>::new(2);
        vec.push(5).unwrap();
        assert_eq!(vec.try_get(0), Ok(5));
        assert_eq!(
            vec.try_get(1),
            Err(VectorError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_put_below_top_is_local() {
        let mut vec = Vector::<u32>::new(0);
        for i in 0..5 {
            vec.push(i * 10).unwrap();
        }
        vec.put(2, 99).unwrap();
        assert_eq!(vec.len(), 5);
        assert_eq!(vec.data[..5], [0, 10, 99, 30, 40]);
    }

    #[test]
    fn test_put_at_capacity_grows() {
        let mut vec = Vector::<u32>::new(3);
        vec.put(3, 1).unwrap();
        assert_eq!(vec.capacity(), 4);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.get(3), Some(1));
        assert_eq!(vec.get(0), Some(0));
    }

    #[test]
    fn test_put_at_len_is_readable() {
        let mut vec = Vector::<u32>::new(4);
        vec.push(1).unwrap();
        vec.put(1, 2).unwrap();
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.get(1), Some(2));
        assert_eq!(vec.push(3).unwrap(), 3);
    }

    #[test]
    fn test_put_within_capacity_no_growth() {
        let mut vec = Vector::<u32>::new(8);
        vec.put(5, 1).unwrap();
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec.len(), 6);
    }

    #[test]
    fn test_put_over_limit() {
        let config = VectorConfig::default()
            .with_initial_capacity(0)
            .with_max_bytes(64);
        let mut vec = Vector::<u64>::with_config(config).unwrap();
        assert!(vec.put(8, 1).is_err());
        assert!(vec.put(usize::MAX, 1).is_err());
        assert_eq!(vec.capacity(), 0);
        assert!(vec.is_empty());

        vec.put(7, 1).unwrap();
        assert_eq!(vec.capacity(), 8);
    }

    #[test]
    fn test_unchecked_ops() {
        let mut vec = Vector::<u16>::new(4);
        unsafe {
            vec.put_unchecked(3, 0xBEEF);
            assert_eq!(vec.get_unchecked(3), 0xBEEF);
            assert_eq!(vec.get_unchecked(0), 0);
        }
        // Unchecked writes leave len alone.
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.get(3), None);
    }
}
