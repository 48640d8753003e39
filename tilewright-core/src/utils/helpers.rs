//! Small index and list helpers.

/// Index `step` positions away from `index` in a list of `len` items, wrapping around.
#[must_use]
pub fn relative_index(len: usize, index: usize, step: i32) -> Option<usize> {
    if len == 0 || index >= len {
        return None;
    }
    let len = len as i64;
    Some((index as i64 + i64::from(step)).rem_euclid(len) as usize)
}

/// Position of `item` in `order`, or past the end when missing.
pub fn order_of<T: PartialEq>(order: &[T], item: &T) -> usize {
    order.iter().position(|o| o == item).unwrap_or(usize::MAX)
}
