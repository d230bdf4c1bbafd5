// SPDX-License-Identifier: MPL-2.0
//! Relative navigation over a cyclic sequence.

/// Direction of a relative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One step back (`-1`).
    Previous,
    /// One step forward (`+1`).
    Next,
}

impl Direction {
    /// Signed offset of this direction.
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Computes `(current + direction + len) mod len`.
///
/// Returns `None` for an empty sequence instead of dividing by zero.
/// An out-of-range `current` is reduced modulo `len` first.
///
/// # Example
///
/// ```
/// use iced_showcase::domain::navigation::{wrap_index, Direction};
///
/// assert_eq!(wrap_index(2, Direction::Next, 3), Some(0));
/// assert_eq!(wrap_index(0, Direction::Previous, 3), Some(2));
/// assert_eq!(wrap_index(0, Direction::Next, 0), None);
/// ```
#[must_use]
pub fn wrap_index(current: usize, direction: Direction, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current % len;
    let next = match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    };
    Some(next)
}
