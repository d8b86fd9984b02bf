// src/raw/vector.rs
//! Byte-slot vector with a runtime element size
//!
//! [`RawVector`] stores elements as opaque `elem_size`-byte records. It mirrors
//! the growth and zeroing rules of [`Vector`](crate::Vector) for callers that
//! only learn the record size at runtime.

use crate::config::VectorConfig;
use crate::error::{Result, VectorError};
use crate::storage;
use std::ops::Range;
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A growable array of fixed-size byte records.
///
/// # Examples
///
/// ```
/// use secvec::RawVector;
/// # use secvec::VectorError;
///
/// let mut vec = RawVector::new(4, 0);
/// vec.push(&1u32.to_le_bytes())?;
/// vec.push(&2u32.to_le_bytes())?;
///
/// let mut out = [0u8; 4];
/// assert!(vec.read_into(1, &mut out)?);
/// assert_eq!(u32::from_le_bytes(out), 2);
/// assert!(!vec.read_into(2, &mut out)?);
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Clone, Debug, ZeroizeOnDrop)]
pub struct RawVector {
    /// Record storage (securely erased on drop); `data.len()` is
    /// `capacity * elem_size`
    data: Vec<u8>,
    /// Size of one record in bytes, fixed at creation
    elem_size: usize,
    /// Number of occupied slots
    top: usize,
    max_slots: usize,
    #[zeroize(skip)]
    config: VectorConfig,
}

impl RawVector {
    /// Creates a vector of `capacity` zeroed records of `elem_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size` is zero, or if the storage would exceed the
    /// default byte limit or cannot be allocated.
    pub fn new(elem_size: usize, capacity: usize) -> Self {
        match Self::try_new(elem_size, capacity) {
            Ok(vec) => vec,
            Err(err) => panic!("RawVector::new({}, {}): {}", elem_size, capacity, err),
        }
    }

    /// Creates a vector of `capacity` zeroed records, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroElementSize`] if `elem_size` is zero,
    /// [`VectorError::SizeTooBig`] if the storage would exceed the default
    /// byte limit, or [`VectorError::AllocationFailed`].
    pub fn try_new(elem_size: usize, capacity: usize) -> Result<Self> {
        Self::with_config(
            elem_size,
            VectorConfig::default().with_initial_capacity(capacity),
        )
    }

    /// Creates a vector of `elem_size`-byte records from a [`VectorConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`try_new`](Self::try_new), measured against `config.max_bytes`.
    pub fn with_config(elem_size: usize, config: VectorConfig) -> Result<Self> {
        if elem_size == 0 {
            return Err(VectorError::ZeroElementSize);
        }
        let max_slots = config.max_slots(elem_size);
        let capacity = config.initial_capacity;
        if capacity > max_slots {
            return Err(VectorError::SizeTooBig {
                requested: capacity,
                max: max_slots,
            });
        }

        debug!("allocating {} elems of {} size", capacity, elem_size);

        let bytes = capacity * elem_size;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)?;
        data.resize(bytes, 0);

        Ok(Self {
            data,
            elem_size,
            top: 0,
            max_slots,
            config,
        })
    }

    /// Returns the size of one record in bytes.
    #[inline(always)]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Returns the number of occupied slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.top
    }

    /// Returns `true` if no slot is occupied.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len() / self.elem_size
    }

    /// Returns the largest capacity this vector may grow to.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_slots
    }

    /// Returns the configuration this vector was created with.
    #[inline]
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> Range<usize> {
        let start = index * self.elem_size;
        start..start + self.elem_size
    }

    #[inline]
    fn check_elem(&self, len: usize) -> Result<()> {
        if len != self.elem_size {
            return Err(VectorError::ElementSizeMismatch {
                expected: self.elem_size,
                actual: len,
            });
        }
        Ok(())
    }

    /// Appends a record at slot `len` and returns the new length.
    ///
    /// Grows like [`Vector::push`](crate::Vector::push).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ElementSizeMismatch`] if `elem.len()` differs
    /// from [`elem_size`](Self::elem_size), plus the growth errors of
    /// [`resize`](Self::resize).
    pub fn push(&mut self, elem: &[u8]) -> Result<usize> {
        self.check_elem(elem.len())?;

        let capacity = self.capacity();
        let target = storage::push_target(capacity, self.top, self.max_slots)?;
        if target > capacity {
            self.resize(target)?;
        }

        let slot = self.slot(self.top);
        self.data[slot].copy_from_slice(elem);
        self.top += 1;
        Ok(self.top)
    }

    /// Returns record `index`, or `None` if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.top {
            return None;
        }
        Some(&self.data[self.slot(index)])
    }

    /// Copies record `index` into `out`.
    ///
    /// Returns `Ok(false)` and leaves `out` untouched if `index >= len`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ElementSizeMismatch`] if `out.len()` differs
    /// from [`elem_size`](Self::elem_size).
    pub fn read_into(&self, index: usize, out: &mut [u8]) -> Result<bool> {
        self.check_elem(out.len())?;
        match self.get(index) {
            Some(elem) => {
                out.copy_from_slice(elem);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Writes a record at slot `index`, growing to `index + 1` slots if
    /// `index >= capacity`. When `index >= len`, `len` becomes `index + 1`,
    /// so the written record is always readable through [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ElementSizeMismatch`] for a wrongly sized
    /// record, plus the growth errors of [`resize`](Self::resize).
    pub fn put(&mut self, index: usize, elem: &[u8]) -> Result<()> {
        self.check_elem(elem.len())?;

        if index >= self.capacity() {
            let needed = index.checked_add(1).ok_or(VectorError::SizeTooBig {
                requested: index,
                max: self.max_slots,
            })?;
            self.resize(needed)?;
        }

        let slot = self.slot(index);
        self.data[slot].copy_from_slice(elem);
        if index >= self.top {
            self.top = index + 1;
        }
        Ok(())
    }

    /// Reallocates storage to exactly `new_capacity` records.
    ///
    /// Zeroing, shrinking, and wiping of the old block follow
    /// [`Vector::resize`](crate::Vector::resize).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeTooBig`] if `new_capacity` exceeds
    /// [`max_capacity`](Self::max_capacity), or [`VectorError::AllocationFailed`].
    pub fn resize(&mut self, new_capacity: usize) -> Result<usize> {
        if new_capacity > self.max_slots {
            debug!(
                "rejecting resize to {} slots (max {})",
                new_capacity, self.max_slots
            );
            return Err(VectorError::SizeTooBig {
                requested: new_capacity,
                max: self.max_slots,
            });
        }

        let old_capacity = self.capacity();
        if new_capacity != old_capacity {
            let keep = self.top.min(new_capacity);
            storage::relocate(
                &mut self.data,
                keep * self.elem_size,
                new_capacity * self.elem_size,
            )?;
            self.top = keep;
        } else {
            let offset = self.top * self.elem_size;
            self.data[offset..].zeroize();
        }

        trace!(
            "resized raw vector from {} to {} slots of {} bytes (len {})",
            old_capacity, new_capacity, self.elem_size, self.top
        );
        Ok(new_capacity)
    }

    /// Wipes every record and resets the length, keeping the capacity.
    pub fn clear(&mut self) {
        self.data.as_mut_slice().zeroize();
        self.top = 0;
    }

    /// Consumes the vector, wiping and releasing its storage.
    pub fn free(mut self) {
        self.clear();
        drop(self);
    }
}
