// src/vector/core.rs
//! Core vector structure, construction, and capacity management
//!
//! This module provides the [`Vector`] type: a growable array of fixed-size
//! slots whose unused tail is always zero, and whose memory is wiped when the
//! vector is released.

use crate::config::VectorConfig;
use crate::error::{Result, VectorError};
use crate::storage;
use tracing::{debug, trace};
use zeroize::{DefaultIsZeroes, Zeroize};

/// A growable array of `T` slots with a high-water mark.
///
/// Every allocated slot is initialized: slots below [`len`](Self::len) hold
/// pushed or put values, slots from `len` up to [`capacity`](Self::capacity)
/// hold `T::default()`, which [`DefaultIsZeroes`] guarantees is all-zero.
///
/// # Memory Safety
///
/// Slot memory is wiped with [`zeroize`] when the vector is cleared, resized,
/// freed, or dropped.
///
/// # Examples
///
/// ```
/// use secvec::Vector;
/// # use secvec::VectorError;
///
/// let mut vec = Vector::<u32>::new(0);
/// vec.push(1)?;
/// vec.push(2)?;
/// assert_eq!(vec.get(1), Some(2));
/// assert_eq!(vec.get(2), None);
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Vector<T: DefaultIsZeroes> {
    /// Slot storage; `data.len()` is the capacity
    pub(crate) data: Vec<T>,
    /// Number of occupied slots
    pub(crate) top: usize,
    /// Growth limit derived from `config.max_bytes`
    pub(crate) max_slots: usize,
    pub(crate) config: VectorConfig,
}

impl<T: DefaultIsZeroes> Vector<T> {
    /// Creates a vector with `capacity` zeroed slots.
    ///
    /// # Panics
    ///
    /// Panics if the storage would exceed the default byte limit
    /// ([`VEC_MAX_BYTES`](crate::config::VEC_MAX_BYTES)) or cannot be allocated.
    /// Use [`try_new`](Self::try_new) to handle these as errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use secvec::Vector;
    ///
    /// let vec = Vector::<u64>::new(8);
    /// assert_eq!(vec.capacity(), 8);
    /// assert_eq!(vec.len(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(vec) => vec,
            Err(err) => panic!("Vector::new({}): {}", capacity, err),
        }
    }

    /// Creates a vector with `capacity` zeroed slots, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeTooBig`] if the storage would exceed the
    /// default byte limit, or [`VectorError::AllocationFailed`] if the
    /// allocator refuses the request.
    pub fn try_new(capacity: usize) -> Result<Self> {
        Self::with_config(VectorConfig::default().with_initial_capacity(capacity))
    }

    /// Creates a vector from a [`VectorConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`try_new`](Self::try_new), measured against `config.max_bytes`.
    ///
    /// # Examples
    ///
    /// ```
    /// use secvec::{Vector, VectorConfig};
    /// # use secvec::VectorError;
    ///
    /// let vec = Vector::<u8>::with_config(VectorConfig::small())?;
    /// assert_eq!(vec.capacity(), 4);
    /// assert_eq!(vec.max_capacity(), 1 << 20);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn with_config(config: VectorConfig) -> Result<Self> {
        let elem_size = std::mem::size_of::<T>();
        let max_slots = config.max_slots(elem_size);
        let capacity = config.initial_capacity;
        if capacity > max_slots {
            return Err(VectorError::SizeTooBig {
                requested: capacity,
                max: max_slots,
            });
        }

        debug!("allocating {} elems of {} size", capacity, elem_size);

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        data.resize(capacity, T::default());

        Ok(Self {
            data,
            top: 0,
            max_slots,
            config,
        })
    }

    /// Returns the number of occupied slots (the high-water mark).
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
        self.data.len()
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

    /// Reallocates storage to exactly `new_capacity` slots.
    ///
    /// Occupied slots below both the old `len` and `new_capacity` are kept.
    /// Every slot from `len` to the new capacity reads as zero afterwards.
    /// Shrinking below `len` clamps `len` to `new_capacity`.
    ///
    /// Any capacity change moves the storage to a new block; the old block
    /// is wiped before it is released. Returns the new capacity.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeTooBig`] if `new_capacity` exceeds
    /// [`max_capacity`](Self::max_capacity), or [`VectorError::AllocationFailed`]
    /// if the allocator refuses. The vector is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use secvec::Vector;
    /// # use secvec::VectorError;
    ///
    /// let mut vec = Vector::<u32>::new(4);
    /// vec.push(7)?;
    /// assert_eq!(vec.resize(32)?, 32);
    /// assert_eq!(vec.get(0), Some(7));
    /// # Ok::<(), VectorError>(())
    /// ```
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
            storage::relocate(&mut self.data, keep, new_capacity)?;
            self.top = keep;
        } else {
            self.data[self.top..].zeroize();
        }

        trace!(
            "resized vector from {} to {} slots (len {})",
            old_capacity, new_capacity, self.top
        );
        Ok(new_capacity)
    }

    /// Wipes every slot and resets the length, keeping the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use secvec::Vector;
    /// # use secvec::VectorError;
    ///
    /// let mut vec = Vector::<u32>::new(4);
    /// vec.push(42)?;
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 4);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn clear(&mut self) {
        // Slice zeroize, not Vec::zeroize: the latter also sets data.len()
        // to 0, which would drop the capacity.
        self.data.as_mut_slice().zeroize();
        self.top = 0;
    }

    /// Consumes the vector, wiping and releasing its storage.
    ///
    /// Dropping the vector has the same effect; this makes the release point
    /// explicit at the call site.
    pub fn free(mut self) {
        self.clear();
        drop(self);
    }
}

impl<T: DefaultIsZeroes> Zeroize for Vector<T> {
    fn zeroize(&mut self) {
        self.clear();
    }
}

impl<T: DefaultIsZeroes> Drop for Vector<T> {
    fn drop(&mut self) {
        self.data.as_mut_slice().zeroize();
    }
}

impl<T: DefaultIsZeroes> Default for Vector<T> {
    fn default() -> Self {
        Self::new(VectorConfig::default().initial_capacity)
    }
}
