use tracing::{debug, trace};

use crate::ListError;

/// Inserts `value` at 1-based `position` of the occupied prefix `data[..*len]`.
///
/// `data.len()` is the capacity. On error nothing is written.
pub(crate) fn insert_at<T: Copy>(
    data: &mut [T],
    len: &mut usize,
    position: usize,
    value: T,
) -> Result<(), ListError> {
    let capacity = data.len();
    if position < 1 || position > capacity {
        debug!(position, capacity, "insert rejected: position outside capacity");
        return Err(ListError::OutOfRange {
            position,
            bound: capacity,
        });
    }
    if *len == capacity {
        debug!(position, capacity, "insert rejected: list full");
        return Err(ListError::Full { capacity });
    }
    if position > *len + 1 {
        debug!(position, len = *len, "insert rejected: position past end");
        return Err(ListError::OutOfRange {
            position,
            bound: *len + 1,
        });
    }

    let index = position - 1;
    // Back to front: slot `*len` is free, every move lands on an already moved slot.
    for j in (index..*len).rev() {
        data[j + 1] = data[j];
    }
    data[index] = value;
    *len += 1;
    trace!(position, len = *len, "inserted");
    Ok(())
}

/// Removes and returns the element at 1-based `position` of `data[..*len]`.
pub(crate) fn delete_at<T: Copy>(
    data: &mut [T],
    len: &mut usize,
    position: usize,
) -> Result<T, ListError> {
    let capacity = data.len();
    debug_assert!(
        *len <= capacity,
        "length {} exceeds capacity {}",
        *len,
        capacity
    );
    if position < 1 || position > capacity {
        debug!(position, capacity, "delete rejected: position outside capacity");
        return Err(ListError::OutOfRange {
            position,
            bound: capacity,
        });
    }
    if *len == 0 {
        debug!(position, "delete rejected: list empty");
        return Err(ListError::Empty);
    }
    if position > *len {
        debug!(position, len = *len, "delete rejected: position past end");
        return Err(ListError::OutOfRange {
            position,
            bound: *len,
        });
    }

    let value = data[position - 1];
    for j in position..*len {
        data[j - 1] = data[j];
    }
    *len -= 1;
    trace!(position, len = *len, "deleted");
    Ok(value)
}
