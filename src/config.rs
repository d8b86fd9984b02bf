// src/config.rs
//! Configuration for vector construction and growth limits

/// Largest byte size any vector may grow to by default (1GB).
pub const VEC_MAX_BYTES: usize = 1_000_000_000;

/// Configuration for vector behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorConfig {
    /// Number of slots allocated at creation
    pub initial_capacity: usize,
    /// Upper bound on `capacity * element size`, in bytes
    pub max_bytes: usize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_bytes: VEC_MAX_BYTES,
        }
    }
}

impl VectorConfig {
    /// Configuration for embedded systems (low memory).
    pub fn small() -> Self {
        Self {
            initial_capacity: 4,
            max_bytes: 1 << 20, // 1MB
        }
    }

    /// Configuration for bulk record storage.
    pub fn large() -> Self {
        Self {
            initial_capacity: 4096,
            max_bytes: VEC_MAX_BYTES,
        }
    }

    /// Sets the number of slots allocated at creation.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the byte limit for growth.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Largest slot count for elements of `elem_size` bytes.
    ///
    /// Zero-sized elements are only limited by `usize`.
    pub fn max_slots(&self, elem_size: usize) -> usize {
        if elem_size == 0 {
            usize::MAX
        } else {
            self.max_bytes / elem_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_slots() {
        let config = VectorConfig::default().with_max_bytes(100);
        assert_eq!(config.max_slots(8), 12);
        assert_eq!(config.max_slots(1), 100);
        assert_eq!(config.max_slots(0), usize::MAX);
    }

    #[test]
    fn test_builders() {
        let config = VectorConfig::small().with_initial_capacity(0);
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.max_bytes, 1 << 20);
    }
}
