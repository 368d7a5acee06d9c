use sqlsplit_core::{stmt::ParameterMapping, Error, Result};

use std::collections::VecDeque;

/// Partitions a parent statement's ordered parameter-mapping list into
/// consumed prefixes, one per sub-statement, in split order.
///
/// Consumption is destructive: each mapping is handed to exactly one
/// sub-statement.
#[derive(Debug)]
pub struct ParameterAllocator {
    unconsumed: VecDeque<ParameterMapping>,
}

impl ParameterAllocator {
    pub fn new(mappings: Vec<ParameterMapping>) -> Self {
        ParameterAllocator {
            unconsumed: mappings.into(),
        }
    }

    /// Removes and returns the first `n` unconsumed mappings, in original
    /// order.
    ///
    /// Requesting more than [`remaining`] is a configuration error and fails
    /// fast with an allocation error.
    ///
    /// [`remaining`]: ParameterAllocator::remaining
    pub fn take(&mut self, n: usize) -> Result<Vec<ParameterMapping>> {
        if n > self.unconsumed.len() {
            return Err(Error::allocation(n, self.unconsumed.len()));
        }
        Ok(self.unconsumed.drain(..n).collect())
    }

    pub fn remaining(&self) -> usize {
        self.unconsumed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mappings(names: &[&str]) -> Vec<ParameterMapping> {
        names.iter().copied().map(ParameterMapping::new).collect()
    }

    #[test]
    fn takes_contiguous_prefixes_in_order() {
        let mut allocator = ParameterAllocator::new(mappings(&["a", "b", "c", "d"]));

        let first = allocator.take(1).unwrap();
        let second = allocator.take(2).unwrap();

        assert_eq!(first[0].property(), "a");
        assert_eq!(second[0].property(), "b");
        assert_eq!(second[1].property(), "c");
        assert_eq!(allocator.remaining(), 1);
    }

    #[test]
    fn take_zero_is_allowed() {
        let mut allocator = ParameterAllocator::new(mappings(&["a"]));
        assert!(allocator.take(0).unwrap().is_empty());
        assert_eq!(allocator.remaining(), 1);
    }

    #[test]
    fn over_allocation_fails_fast() {
        let mut allocator = ParameterAllocator::new(mappings(&["a"]));
        let err = allocator.take(2).unwrap_err();
        assert!(err.is_allocation());
        // The list is untouched after a failed take
        assert_eq!(allocator.remaining(), 1);
    }
}
