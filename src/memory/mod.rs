//! Compact indices and the side tables keyed by them.
//!
//! Graph algorithms in this crate address nodes by a dense [`NodeIndex`]
//! rather than by their key, so that per-invocation state such as visited
//! sets and frontier tables can live in flat vectors.
//!
//! Inspired by the memory management in Cranelift IR.
//!
//! [`NodeIndex`]: crate::NodeIndex
pub mod map;

pub use map::SecondaryMap;

pub trait EntityIndex: Copy + Eq + Default {
    /// Creates an index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit into the backing integer.
    fn new(index: usize) -> Self {
        match Self::try_new(index) {
            Some(index) => index,
            None => panic!("index {index} exceeds the capacity of the index type"),
        }
    }

    fn try_new(index: usize) -> Option<Self>;
    fn index(self) -> usize;
}

/// Macro which provides the common implementation of an n-bit entity reference
///
/// Based on [`cranelift_entity`'s `entity_impl!`](https://docs.rs/cranelift-entity/0.89.2/cranelift_entity/macro.entity_impl.html)
#[macro_export]
macro_rules! entity_impl {
    ($entity:ident, $backing:ty) => {
        impl $crate::memory::EntityIndex for $entity {
            #[inline(always)]
            fn try_new(ix: usize) -> Option<Self> {
                if ix <= (<$backing>::MAX as usize) || (<$backing>::BITS) > usize::BITS {
                    Some($entity(ix as $backing))
                } else {
                    None
                }
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}
