use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{LinearList, ListError};

const NIL: u32 = u32::MAX;
const HEAD: u32 = 0;

/// Handle to a node of a [`LinkList`].
///
/// Handles are checked against the slot generation, so a handle to a deleted
/// node stays invalid even after its slot is reused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

#[derive(Clone)]
struct Slot<T> {
    value: Option<T>,
    next: u32,
    generation: u32,
    live: bool,
}

/// Singly linked list with a head node.
///
/// - Nodes live in a slot pool owned by the list; released slots are chained
///   into a free list and reused.
/// - Position 0 is the head, which carries no value. Position `i >= 1` is the
///   `i`-th value node after it.
/// - The pool can be capped with [`LinkList::with_node_limit`]; the head
///   counts towards the limit.
#[derive(Clone)]
pub struct LinkList<T> {
    slots: Vec<Slot<T>>,
    free: u32,
    live: usize,
    node_limit: usize,
}

impl<T> LinkList<T> {
    pub fn try_new() -> Result<Self, ListError> {
        Self::with_node_limit(usize::MAX)
    }

    pub fn with_node_limit(node_limit: usize) -> Result<Self, ListError> {
        let mut list = Self {
            slots: Vec::new(),
            free: NIL,
            live: 0,
            node_limit,
        };
        let head = list.alloc_slot(None, NIL)?;
        debug_assert_eq!(head, HEAD);
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.live - 1
    }

    pub fn is_empty(&self) -> bool {
        self.live == 1
    }

    pub fn head(&self) -> NodeId {
        self.id(HEAD)
    }

    /// Node at `position`, walking from the head (position 0).
    pub fn get_node(&self, position: usize) -> Option<NodeId> {
        let mut p = HEAD;
        let mut j = 0;
        while j < position && p != NIL {
            p = self.slots[p as usize].next;
            j += 1;
        }
        (p != NIL).then(|| self.id(p))
    }

    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        let index = self.resolve(node)?;
        let next = self.slots[index as usize].next;
        (next != NIL).then(|| self.id(next))
    }

    /// `None` for the head and for stale handles.
    pub fn value(&self, node: NodeId) -> Option<&T> {
        let index = self.resolve(node)?;
        self.slots[index as usize].value.as_ref()
    }

    /// Links a new node holding `value` right after `p`.
    pub fn insert_next_node(&mut self, p: Option<NodeId>, value: T) -> Result<NodeId, ListError> {
        let p = p
            .and_then(|node| self.resolve(node))
            .ok_or(ListError::InvalidNode)?;
        let next = self.slots[p as usize].next;
        let s = self.alloc_slot(Some(value), next)?;
        self.slots[p as usize].next = s;
        trace!(after = p, node = s, "linked node");
        Ok(self.id(s))
    }

    /// "Insert before" by value swap.
    ///
    /// A new node is linked after `p` and receives `p`'s old value, then `p`
    /// takes `value`. Traversal reads `value` where `p`'s content was, followed
    /// by that old content. The returned handle is the new node, which now
    /// holds the old value; `p` keeps its handle and holds `value`.
    ///
    /// The head has no value to relocate and is rejected with `InvalidNode`.
    pub fn insert_prior_node(&mut self, p: Option<NodeId>, value: T) -> Result<NodeId, ListError> {
        let p = p
            .and_then(|node| self.resolve(node))
            .filter(|&index| index != HEAD)
            .ok_or(ListError::InvalidNode)?;
        let next = self.slots[p as usize].next;
        let s = self.alloc_slot(None, next)?;
        let old = self.slots[p as usize].value.replace(value);
        self.slots[s as usize].value = old;
        self.slots[p as usize].next = s;
        trace!(before = p, node = s, "swapped value into node");
        Ok(self.id(s))
    }

    /// Inserts `value` so that it ends up at 1-based `position`.
    pub fn list_insert(&mut self, position: usize, value: T) -> Result<NodeId, ListError> {
        let bound = self.len() + 1;
        if position < 1 {
            debug!(position, "insert rejected: position below 1");
            return Err(ListError::OutOfRange { position, bound });
        }
        let Some(p) = self.get_node(position - 1) else {
            debug!(position, bound, "insert rejected: position past end");
            return Err(ListError::OutOfRange { position, bound });
        };
        self.insert_next_node(Some(p), value)
    }

    /// Unlinks the node at 1-based `position` and returns its value.
    pub fn list_delete(&mut self, position: usize) -> Result<T, ListError> {
        let bound = self.len();
        if position < 1 {
            debug!(position, "delete rejected: position below 1");
            return Err(ListError::OutOfRange { position, bound });
        }
        if bound == 0 {
            debug!(position, "delete rejected: list empty");
            return Err(ListError::Empty);
        }
        let prev = self
            .get_node(position - 1)
            .map(|node| node.index)
            .filter(|&p| self.slots[p as usize].next != NIL);
        let Some(p) = prev else {
            debug!(position, bound, "delete rejected: position past end");
            return Err(ListError::OutOfRange { position, bound });
        };

        let q = self.slots[p as usize].next;
        self.slots[p as usize].next = self.slots[q as usize].next;
        let value = self.release_slot(q).ok_or(ListError::InvalidNode)?;
        trace!(position, node = q, "unlinked node");
        Ok(value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.slots[HEAD as usize].next,
            remaining: self.len(),
        }
    }

    fn id(&self, index: u32) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    fn resolve(&self, node: NodeId) -> Option<u32> {
        let slot = self.slots.get(node.index as usize)?;
        (slot.live && slot.generation == node.generation).then_some(node.index)
    }

    fn alloc_slot(&mut self, value: Option<T>, next: u32) -> Result<u32, ListError> {
        if self.live >= self.node_limit {
            debug!(limit = self.node_limit, "allocation refused: node limit reached");
            return Err(ListError::Allocation);
        }

        let index = if self.free != NIL {
            let index = self.free;
            let slot = &mut self.slots[index as usize];
            self.free = slot.next;
            slot.value = value;
            slot.next = next;
            slot.live = true;
            index
        } else {
            if self.slots.len() >= NIL as usize {
                return Err(ListError::Allocation);
            }
            self.slots
                .try_reserve(1)
                .map_err(|_| ListError::Allocation)?;
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                value,
                next,
                generation: 0,
                live: true,
            });
            index
        };
        self.live += 1;
        Ok(index)
    }

    fn release_slot(&mut self, index: u32) -> Option<T> {
        debug_assert_ne!(index, HEAD);
        let slot = &mut self.slots[index as usize];
        let value = slot.value.take();
        slot.live = false;
        slot.generation = slot.generation.wrapping_add(1);
        slot.next = self.free;
        self.free = index;
        self.live -= 1;
        value
    }
}

impl<T> LinearList for LinkList<T> {
    type Elem = T;

    fn len(&self) -> usize {
        LinkList::len(self)
    }

    fn get(&self, position: usize) -> Option<&T> {
        if position == 0 {
            return None;
        }
        self.get_node(position).and_then(|node| self.value(node))
    }

    fn insert(&mut self, position: usize, value: T) -> Result<(), ListError> {
        self.list_insert(position, value).map(|_| ())
    }

    fn delete(&mut self, position: usize) -> Result<T, ListError> {
        self.list_delete(position)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkList<T>,
    cursor: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let slot = &self.list.slots[self.cursor as usize];
        self.cursor = slot.next;
        self.remaining -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::LinkList;
    use crate::ListError;

    fn values(list: &LinkList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn init_has_only_head() {
        let list = LinkList::<i32>::try_new().unwrap();
        let head = list.head();
        assert_eq!(list.len(), 0);
        assert_eq!(list.next(head), None);
        assert_eq!(list.value(head), None);
        assert_eq!(list.get_node(0), Some(head));
        assert_eq!(list.get_node(1), None);
    }

    #[test]
    fn positional_insert_and_delete() {
        let mut list = LinkList::try_new().unwrap();
        list.list_insert(1, 7).unwrap();
        assert_eq!(values(&list), vec![7]);
        list.list_insert(2, 9).unwrap();
        assert_eq!(values(&list), vec![7, 9]);
        assert_eq!(list.list_delete(1), Ok(7));
        assert_eq!(values(&list), vec![9]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_after_head_then_delete_first() {
        let mut list = LinkList::try_new().unwrap();
        list.list_insert(1, 1).unwrap();
        list.list_insert(2, 2).unwrap();
        let before = list.len();

        let head = list.head();
        list.insert_next_node(Some(head), 5).unwrap();
        assert_eq!(values(&list), vec![5, 1, 2]);
        assert_eq!(list.list_delete(1), Ok(5));
        assert_eq!(list.len(), before);
        assert_eq!(values(&list), vec![1, 2]);
    }

    #[test]
    fn prior_insert_swaps_values() {
        let mut list = LinkList::try_new().unwrap();
        for (i, v) in [10, 20, 30].into_iter().enumerate() {
            list.list_insert(i + 1, v).unwrap();
        }
        let p = list.get_node(2).unwrap();
        let s = list.insert_prior_node(Some(p), 15).unwrap();

        assert_eq!(values(&list), vec![10, 15, 20, 30]);
        assert_eq!(list.value(p), Some(&15));
        assert_eq!(list.value(s), Some(&20));
        assert_eq!(list.next(p), Some(s));
        assert_eq!(list.next(s), list.get_node(4));
    }

    #[test]
    fn prior_insert_on_tail_node() {
        let mut list = LinkList::try_new().unwrap();
        let a = list.list_insert(1, 1).unwrap();
        let s = list.insert_prior_node(Some(a), 0).unwrap();
        assert_eq!(values(&list), vec![0, 1]);
        assert_eq!(list.next(s), None);
    }

    #[test]
    fn missing_or_head_nodes_are_rejected() {
        let mut list = LinkList::<i32>::try_new().unwrap();
        let head = list.head();
        assert_eq!(list.insert_next_node(None, 1), Err(ListError::InvalidNode));
        assert_eq!(list.insert_prior_node(None, 1), Err(ListError::InvalidNode));
        assert_eq!(list.insert_prior_node(Some(head), 1), Err(ListError::InvalidNode));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn stale_handles_stay_invalid_after_reuse() {
        let mut list = LinkList::try_new().unwrap();
        let a = list.list_insert(1, 1).unwrap();
        assert_eq!(list.list_delete(1), Ok(1));
        assert_eq!(list.value(a), None);

        let b = list.list_insert(1, 2).unwrap();
        assert_ne!(a, b);
        assert_eq!(list.value(a), None);
        assert_eq!(list.value(b), Some(&2));
        assert_eq!(list.insert_next_node(Some(a), 3), Err(ListError::InvalidNode));
        assert_eq!(list.slots.len(), 2);
    }

    #[test]
    fn positions_out_of_range() {
        let mut list = LinkList::try_new().unwrap();
        assert_eq!(
            list.list_insert(0, 1),
            Err(ListError::OutOfRange {
                position: 0,
                bound: 1
            })
        );
        assert_eq!(
            list.list_insert(2, 1),
            Err(ListError::OutOfRange {
                position: 2,
                bound: 1
            })
        );
        assert_eq!(list.list_delete(1), Err(ListError::Empty));

        list.list_insert(1, 1).unwrap();
        assert_eq!(
            list.list_delete(0),
            Err(ListError::OutOfRange {
                position: 0,
                bound: 1
            })
        );
        assert_eq!(
            list.list_delete(2),
            Err(ListError::OutOfRange {
                position: 2,
                bound: 1
            })
        );
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn node_limit_surfaces_allocation_errors() {
        assert!(matches!(
            LinkList::<i32>::with_node_limit(0),
            Err(ListError::Allocation)
        ));

        let mut list = LinkList::with_node_limit(3).unwrap();
        list.list_insert(1, 1).unwrap();
        list.list_insert(2, 2).unwrap();
        assert_eq!(list.list_insert(3, 3), Err(ListError::Allocation));
        let tail = list.get_node(2).unwrap();
        assert_eq!(list.insert_prior_node(Some(tail), 9), Err(ListError::Allocation));
        assert_eq!(values(&list), vec![1, 2]);

        assert_eq!(list.list_delete(1), Ok(1));
        list.list_insert(2, 3).unwrap();
        assert_eq!(values(&list), vec![2, 3]);
    }

    #[test]
    fn debug_lists_values() {
        let mut list = LinkList::try_new().unwrap();
        list.list_insert(1, 4).unwrap();
        list.list_insert(2, 2).unwrap();
        assert_eq!(format!("{list:?}"), "[4, 2]");
        assert_eq!(list.iter().len(), 2);
    }
}
