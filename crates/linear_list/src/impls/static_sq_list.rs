use crate::impls::contiguous::{delete_at, insert_at};
use crate::{DEFAULT_CAPACITY, LinearList, ListError};

/// Sequential list stored inline in a `[T; N]` array.
///
/// The capacity is fixed at compile time and cannot grow; see [`crate::SqList`]
/// for the heap-backed variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticSqList<T, const N: usize = DEFAULT_CAPACITY> {
    data: [T; N],
    length: usize,
}

impl<T: Copy + Default, const N: usize> StaticSqList<T, N> {
    /// Empty list with every slot set to `T::default()`.
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            length: 0,
        }
    }

    pub fn from_slice(values: &[T]) -> Result<Self, ListError> {
        if values.len() > N {
            return Err(ListError::OutOfRange {
                position: values.len(),
                bound: N,
            });
        }
        let mut list = Self::new();
        list.data[..values.len()].copy_from_slice(values);
        list.length = values.len();
        Ok(list)
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.length]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Copy + Default, const N: usize> Default for StaticSqList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> LinearList for StaticSqList<T, N> {
    type Elem = T;

    fn len(&self) -> usize {
        self.length
    }

    fn get(&self, position: usize) -> Option<&T> {
        position.checked_sub(1).and_then(|i| self.as_slice().get(i))
    }

    fn insert(&mut self, position: usize, value: T) -> Result<(), ListError> {
        insert_at(&mut self.data, &mut self.length, position, value)
    }

    fn delete(&mut self, position: usize) -> Result<T, ListError> {
        delete_at(&mut self.data, &mut self.length, position)
    }

    fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}
