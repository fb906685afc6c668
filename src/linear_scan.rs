use std::cmp::Ordering;

use crate::{
    comparator::Comparator,
    sorted_array::{Direction, Found, SearchOptions},
};

/// Walk the window in `options.direction` and return the first element for
/// which `predicate(element, index)` holds.
pub fn find_first<T, P>(items: &[T], mut predicate: P, options: SearchOptions) -> Option<Found<'_, T>>
where
    P: FnMut(&T, usize) -> bool,
{
    let (left, right) = options.resolve(items.len());
    if left >= right {
        return None;
    }
    let index = match options.direction {
        Direction::Right => (left..right).find(|&i| predicate(&items[i], i)),
        Direction::Left => (left..right).rev().find(|&i| predicate(&items[i], i)),
    }?;
    Some(Found::new(&items[index], index))
}

/// Boundary search by direct iteration.
///
/// Same answers as [`SortedArray::search`](crate::SortedArray::search) for an
/// ordered `items`, in time linear in the window.
pub fn scan<'a, T, C>(
    items: &'a [T],
    comparator: &C,
    needle: &T,
    options: SearchOptions,
) -> Option<Found<'a, T>>
where
    C: Comparator<T>,
{
    let satisfies = |ordering: Ordering| match (options.direction, options.inclusive) {
        (Direction::Right, true) => ordering != Ordering::Less,
        (Direction::Right, false) => ordering == Ordering::Greater,
        (Direction::Left, true) => ordering != Ordering::Greater,
        (Direction::Left, false) => ordering == Ordering::Less,
    };
    find_first(
        items,
        |element, _| satisfies(comparator.compare(element, needle)),
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Ascending;

    #[test]
    fn test_scan_table() {
        let items = [1, 2, 2, 3];
        let right = SearchOptions::new();
        let left = right.direction(Direction::Left);
        assert_eq!(scan(&items, &Ascending, &2, right).unwrap().index, 1);
        assert_eq!(scan(&items, &Ascending, &2, right.inclusive(false)).unwrap().index, 3);
        assert_eq!(scan(&items, &Ascending, &2, left).unwrap().index, 2);
        assert_eq!(scan(&items, &Ascending, &2, left.inclusive(false)).unwrap().index, 0);
    }

    #[test]
    fn test_find_first_uses_index() {
        let items = ["a", "b", "c"];
        let found = find_first(&items, |_, i| i % 2 == 1, SearchOptions::new());
        assert_eq!(found, Some(Found::new(&"b", 1)));
    }

    #[test]
    fn test_empty_window() {
        let items: [u8; 0] = [];
        assert_eq!(find_first(&items, |_, _| true, SearchOptions::new()), None);
        assert_eq!(
            find_first(&[1, 2], |_, _| true, SearchOptions::new().range(2..)),
            None
        );
    }
}
