use tracing::debug;

use crate::impls::contiguous::{delete_at, insert_at};
use crate::{DEFAULT_CAPACITY, LinearList, ListError};

/// Sequential list on a heap buffer whose capacity grows only through
/// [`SqList::increase_size`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqList<T> {
    data: Box<[T]>,
    length: usize,
}

impl<T: Copy + Default> SqList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity].into_boxed_slice(),
            length: 0,
        }
    }

    pub fn from_slice(values: &[T], capacity: usize) -> Result<Self, ListError> {
        if values.len() > capacity {
            return Err(ListError::OutOfRange {
                position: values.len(),
                bound: capacity,
            });
        }
        let mut list = Self::with_capacity(capacity);
        list.data[..values.len()].copy_from_slice(values);
        list.length = values.len();
        Ok(list)
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.length]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Reallocates the buffer with room for `delta` more elements.
    ///
    /// Only the occupied prefix is carried over; the new tail is
    /// `T::default()`. On error the list is left as it was.
    pub fn increase_size(&mut self, delta: usize) -> Result<(), ListError> {
        if delta == 0 {
            return Ok(());
        }
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_add(delta)
            .ok_or(ListError::Allocation)?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(new_capacity)
            .map_err(|_| ListError::Allocation)?;
        storage.extend_from_slice(self.as_slice());
        storage.resize(new_capacity, T::default());

        self.data = storage.into_boxed_slice();
        debug!(old_capacity, new_capacity, len = self.length, "grew storage");
        Ok(())
    }
}

impl<T: Copy + Default> Default for SqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> LinearList for SqList<T> {
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
