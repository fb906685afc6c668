use std::ops::{Bound, RangeBounds};

/// Floor of the average of `l` and `r` without overflowing.
pub fn midpoint(l: usize, r: usize) -> usize {
    l + (r - l) / 2
}

/// Resolve optional half-open bounds against a sequence of length `len`.
///
/// Missing bounds default to the whole sequence and supplied bounds are
/// clamped to `[0, len]`. The result may be empty (`left >= right`).
pub fn clamp_range(left: Option<usize>, right: Option<usize>, len: usize) -> (usize, usize) {
    let left = left.unwrap_or(0).min(len);
    let right = right.unwrap_or(len).min(len);
    (left, right)
}

/// Convert any range expression into optional half-open bounds.
pub fn range_bounds<R: RangeBounds<usize>>(range: &R) -> (Option<usize>, Option<usize>) {
    let left = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => Some(start.saturating_add(1)),
        Bound::Unbounded => None,
    };
    let right = match range.end_bound() {
        Bound::Included(&end) => Some(end.saturating_add(1)),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => None,
    };
    (left, right)
}
