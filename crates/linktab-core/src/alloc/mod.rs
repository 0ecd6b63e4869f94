//! Allocation and collection types for linktab.
//!
//! This module provides:
//! - Re-exports of hash collections using AHash
//! - [`SparseSet`](sparse_set::SparseSet), a slot map with generational indices

pub mod sparse_set;

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet};
pub use sparse_set::{IndexSlot, SparseSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("tab", 3usize);
        assert_eq!(map.get("tab"), Some(&3));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert(42);
        assert!(set.contains(&42));
    }
}
