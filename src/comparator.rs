use std::cmp::Ordering;

/// A total preorder over `T`.
///
/// Implementations must be pure: the search engine calls `compare` any number
/// of times and assumes the answer never changes for the same pair.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their `Ord` implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ascending;

impl<T: Ord + ?Sized> Comparator<T> for Ascending {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by the reverse of their `Ord` implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord + ?Sized> Comparator<T> for Descending {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
        assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
    }

    #[test]
    fn test_ascending_and_descending() {
        assert_eq!(Ascending.compare(&1, &2), Ordering::Less);
        assert_eq!(Descending.compare(&1, &2), Ordering::Greater);
        assert_eq!(Descending.compare(&"a", &"a"), Ordering::Equal);
    }
}
