//! Slot arithmetic of the breadth-first layout.

pub(crate) fn left_child_pos(parent: usize) -> usize {
    2 * parent + 1
}

pub(crate) fn right_child_pos(parent: usize) -> usize {
    2 * parent + 2
}

/// Odd slots are left children, even slots (but the root) are right children.
pub(crate) fn parent_pos(child: usize) -> Option<usize> {
    if child == 0 {
        return None;
    }
    if child % 2 == 0 {
        Some(child / 2 - 1)
    } else {
        Some(child / 2)
    }
}
