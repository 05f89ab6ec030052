use std::{
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use super::EntityIndex;

/// Dense table that associates a value with every index.
///
/// Indices that were never written read as the default value. Writing past
/// the end grows the table.
#[derive(Debug, Clone)]
pub struct SecondaryMap<K, V> {
    values: Vec<V>,
    default: V,
    phantom: PhantomData<K>,
}

impl<K: EntityIndex, V: Clone> SecondaryMap<K, V> {
    pub fn new() -> Self
    where
        V: Default,
    {
        Self {
            values: Vec::new(),
            default: V::default(),
            phantom: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self
    where
        V: Default,
    {
        Self {
            values: Vec::with_capacity(capacity),
            default: V::default(),
            phantom: PhantomData,
        }
    }

    /// Returns the value stored at `key` and resets the slot to the default.
    pub fn take(&mut self, key: K) -> V {
        match self.values.get_mut(key.index()) {
            Some(slot) => std::mem::replace(slot, self.default.clone()),
            None => self.default.clone(),
        }
    }
}

impl<K: EntityIndex, V: Default + Clone> Default for SecondaryMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntityIndex, V> Index<K> for SecondaryMap<K, V> {
    type Output = V;

    fn index(&self, index: K) -> &Self::Output {
        self.values.get(index.index()).unwrap_or(&self.default)
    }
}

impl<K: EntityIndex, V: Clone> IndexMut<K> for SecondaryMap<K, V> {
    fn index_mut(&mut self, index: K) -> &mut Self::Output {
        let index = index.index();

        if index >= self.values.len() {
            self.values.resize(index + 1, self.default.clone());
        }

        &mut self.values[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NodeIndex;

    #[test]
    fn unwritten_slots_read_default() {
        let mut map = SecondaryMap::<NodeIndex, Option<u8>>::new();
        map[NodeIndex::new(3)] = Some(7);

        assert_eq!(map[NodeIndex::new(0)], None);
        assert_eq!(map[NodeIndex::new(3)], Some(7));
        assert_eq!(map[NodeIndex::new(100)], None);
    }

    #[test]
    fn take_resets_slot() {
        let mut map = SecondaryMap::<NodeIndex, Option<u8>>::with_capacity(2);
        map[NodeIndex::new(1)] = Some(4);

        assert_eq!(map.take(NodeIndex::new(1)), Some(4));
        assert_eq!(map.take(NodeIndex::new(1)), None);
        assert_eq!(map.take(NodeIndex::new(9)), None);
    }
}
