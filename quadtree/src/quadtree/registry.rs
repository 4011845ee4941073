use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::AABox;
use fxhash::FxHashMap;
use std::hash::Hash;

/// Authoritative key to box mapping. Nodes only ever hold keys and look their
/// boxes up here.
#[derive(Debug, Clone)]
pub struct BoxRegistry<D> {
    boxes: FxHashMap<D, AABox>,
}

impl<D: Copy + Eq + Hash> BoxRegistry<D> {
    pub fn new() -> Self {
        Self {
            boxes: FxHashMap::default(),
        }
    }

    /// Upserts the box for `key`, returning the box it replaced.
    pub fn put(&mut self, key: D, aabox: AABox) -> Option<AABox> {
        self.boxes.insert(key, aabox)
    }

    pub fn get(&self, key: &D) -> Option<AABox> {
        self.boxes.get(key).copied()
    }

    pub fn contains(&self, key: &D) -> bool {
        self.boxes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (D, AABox)> + '_ {
        self.boxes.iter().map(|(key, aabox)| (*key, *aabox))
    }

    // Every key a node holds was put here first, so a miss is a broken tree.
    pub(crate) fn fetch(&self, key: &D) -> QuadtreeResult<AABox> {
        self.get(key).ok_or(QuadtreeError::UnregisteredKey)
    }
}

impl<D: Copy + Eq + Hash> Default for BoxRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::Point2D;

    #[test]
    fn put_is_an_upsert() {
        let mut registry = BoxRegistry::new();
        let first = AABox::square(Point2D::new(0.0, 0.0), 1.0);
        let second = AABox::square(Point2D::new(5.0, 5.0), 2.0);
        assert_eq!(registry.put(7u32, first), None);
        assert_eq!(registry.put(7u32, second), Some(first));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&7), Some(second));
    }

    #[test]
    fn fetch_unknown_key_fails() {
        let registry: BoxRegistry<u32> = BoxRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.contains(&3));
        assert_eq!(registry.fetch(&3), Err(QuadtreeError::UnregisteredKey));
    }
}
