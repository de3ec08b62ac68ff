mod error;
mod logging;

pub mod impls;

pub use error::ListError;
pub use impls::{LinkList, NodeId, SqList, StaticSqList};
pub use logging::init_driver_logging;

/// Capacity of a freshly initialised sequential list.
pub const DEFAULT_CAPACITY: usize = 10;

/// Linear list addressed by 1-based position.
///
/// - `insert(i, e)` puts `e` at position `i`, moving the old `i..` one step
///   back. Valid positions are `1..=len() + 1`.
/// - `delete(i)` removes and returns the element at `i`, valid for `1..=len()`.
/// - A failed call leaves the list unchanged.
pub trait LinearList {
    type Elem;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, position: usize) -> Option<&Self::Elem>;

    fn insert(&mut self, position: usize, value: Self::Elem) -> Result<(), ListError>;

    fn delete(&mut self, position: usize) -> Result<Self::Elem, ListError>;

    fn to_vec(&self) -> Vec<Self::Elem>
    where
        Self::Elem: Clone,
    {
        (1..=self.len())
            .filter_map(|position| self.get(position).cloned())
            .collect()
    }
}
