use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{Deref, RangeBounds},
};

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    binary_search::{partition_first, partition_last},
    comparator::{Ascending, Comparator},
    error::{Result, UnsortedArrayError},
    linear_scan,
    math::{clamp_range, range_bounds},
};

/// Which end of the range a search starts from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Direction {
    /// Low to high index: returns the first element past the boundary.
    #[default]
    Right,
    /// High to low index: returns the last element before the boundary.
    Left,
}

/// How [`SortedArray::build`] treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    /// Check every adjacent pair and fail on the first one out of order. Defaults to `true`.
    pub validate: bool,
    /// Copy the input into storage owned by the container. Defaults to `true`.
    pub clone: bool,
}

impl BuildOptions {
    /// Validate and copy.
    pub const PARSE: Self = Self {
        validate: true,
        clone: true,
    };

    /// Neither validate nor copy; the caller guarantees the order.
    pub const UNCHECKED: Self = Self {
        validate: false,
        clone: false,
    };
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::PARSE
    }
}

/// Per-call search configuration.
///
/// | field       | default          |
/// |-------------|------------------|
/// | `left`      | `0`              |
/// | `right`     | length           |
/// | `direction` | [`Direction::Right`] |
/// | `inclusive` | `true`           |
///
/// `left` and `right` describe the half-open window `[left, right)` and are
/// clamped to the length of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub direction: Direction,
    pub inclusive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            direction: Direction::Right,
            inclusive: true,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the search to a range expression such as `2..`, `..=5` or `1..4`.
    pub fn range<R: RangeBounds<usize>>(mut self, range: R) -> Self {
        (self.left, self.right) = range_bounds(&range);
        self
    }

    pub fn left(mut self, left: usize) -> Self {
        self.left = Some(left);
        self
    }

    pub fn right(mut self, right: usize) -> Self {
        self.right = Some(right);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    /// The clamped `[left, right)` window for a sequence of length `len`.
    pub fn resolve(&self, len: usize) -> (usize, usize) {
        clamp_range(self.left, self.right, len)
    }
}

/// A successful search: the element and its position in the container.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Found<'a, T> {
    pub element: &'a T,
    pub index: usize,
}

impl<'a, T> Found<'a, T> {
    pub fn new(element: &'a T, index: usize) -> Self {
        Self { element, index }
    }
}

impl<T> Clone for Found<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Found<'_, T> {}

/// An immutable sequence ordered by a [`Comparator`].
///
/// Every adjacent pair satisfies `compare(items[i], items[i + 1]) != Greater`,
/// either because construction checked it or because the caller promised it
/// through [`SortedArray::unchecked`].
pub struct SortedArray<T, C, S = Vec<T>> {
    items: S,
    comparator: C,
    element: PhantomData<T>,
}

impl<T: fmt::Debug, C, S: Deref<Target = [T]>> fmt::Debug for SortedArray<T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedArray")
            .field("items", &self.as_slice())
            .finish_non_exhaustive()
    }
}

impl<T, C: Clone, S: Clone> Clone for SortedArray<T, C, S> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            comparator: self.comparator.clone(),
            element: PhantomData,
        }
    }
}

/// Copy `source` left to right, checking each pair as it lands in the copy.
fn copy_validated<T: Clone, C: Comparator<T>>(source: &[T], comparator: &C) -> Result<Vec<T>> {
    let mut items = Vec::with_capacity(source.len());
    for (position, element) in source.iter().enumerate() {
        items.push(element.clone());
        if let [.., previous, last] = items.as_slice() {
            if comparator.compare(previous, last) == Ordering::Greater {
                debug!(index = position - 1, "rejecting unsorted input");
                return Err(UnsortedArrayError::new(position - 1));
            }
        }
    }
    Ok(items)
}

fn check_sorted<T, C: Comparator<T>>(items: &[T], comparator: &C) -> Result<()> {
    match items
        .windows(2)
        .position(|pair| comparator.compare(&pair[0], &pair[1]) == Ordering::Greater)
    {
        Some(index) => {
            debug!(index, "rejecting unsorted input");
            Err(UnsortedArrayError::new(index))
        }
        None => Ok(()),
    }
}

impl<'a, T: Clone, C: Comparator<T>> SortedArray<T, C, Cow<'a, [T]>> {
    /// Build a container from `source` according to `options`.
    ///
    /// With `clone` the container owns a copy of `source`; without it the
    /// container borrows `source` directly. With `validate` the first
    /// out-of-order pair is reported as an error.
    ///
    /// ```
    /// # use sorted_array::{Ascending, BuildOptions, SortedArray};
    /// let source = [1, 2, 2, 5];
    /// let array = SortedArray::build(&source, Ascending, BuildOptions::default()).unwrap();
    /// assert_eq!(array.search_right(&2, None, false).unwrap().index, 3);
    /// assert_eq!(SortedArray::build(&[3, 4, 2], Ascending, BuildOptions::PARSE).unwrap_err().index, 1);
    /// ```
    pub fn build(source: &'a [T], comparator: C, options: BuildOptions) -> Result<Self> {
        trace!(len = source.len(), ?options, "building sorted array");
        let items = match options {
            BuildOptions {
                validate: true,
                clone: true,
            } => Cow::Owned(copy_validated(source, &comparator)?),
            BuildOptions {
                validate: false,
                clone: true,
            } => Cow::Owned(source.to_vec()),
            BuildOptions {
                validate: true,
                clone: false,
            } => {
                check_sorted(source, &comparator)?;
                Cow::Borrowed(source)
            }
            BuildOptions {
                validate: false,
                clone: false,
            } => Cow::Borrowed(source),
        };
        Ok(SortedArray::unchecked(items, comparator))
    }
}

impl<T: Clone, C: Comparator<T>> SortedArray<T, C> {
    /// Validate `source` while copying it into a new container.
    ///
    /// Later changes to `source` are never visible through the container.
    pub fn parse(source: &[T], comparator: C) -> Result<Self> {
        trace!(len = source.len(), "parsing sorted array");
        let items = copy_validated(source, &comparator)?;
        Ok(Self::unchecked(items, comparator))
    }
}

impl<T, C: Comparator<T>> SortedArray<T, C> {
    /// Validate an owned vector without copying it.
    pub fn from_vec(items: Vec<T>, comparator: C) -> Result<Self> {
        check_sorted(&items, &comparator)?;
        Ok(Self::unchecked(items, comparator))
    }
}

impl<T: Ord> TryFrom<Vec<T>> for SortedArray<T, Ascending> {
    type Error = UnsortedArrayError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::from_vec(items, Ascending)
    }
}

impl<T, C, S: Deref<Target = [T]>> SortedArray<T, C, S> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Give back the storage and the comparator.
    pub fn into_inner(self) -> (S, C) {
        (self.items, self.comparator)
    }
}

impl<T, C: Comparator<T>, S: Deref<Target = [T]>> SortedArray<T, C, S> {
    /// Wrap `items` as-is, without copying or checking the order.
    ///
    /// The container reads straight from `items`, so if the caller can still
    /// change the elements (a borrowed slice of `Cell`s, say) those changes
    /// show up in later searches. Keeping the sequence ordered is the
    /// caller's job; searching an unordered sequence returns an unspecified
    /// element of the range, or nothing.
    pub fn unchecked(items: S, comparator: C) -> Self {
        Self {
            items,
            comparator,
            element: PhantomData,
        }
    }

    /// Find the boundary element for `needle` inside the configured window.
    ///
    /// | direction | inclusive | returns                                  |
    /// |-----------|-----------|------------------------------------------|
    /// | Right     | true      | first element `>= needle`                |
    /// | Right     | false     | first element `> needle`                 |
    /// | Left      | true      | last element `<= needle`                 |
    /// | Left      | false     | last element `< needle`                  |
    ///
    /// An empty window returns `None` without calling the comparator.
    ///
    /// ```
    /// # use sorted_array::{Ascending, SearchOptions, SortedArray};
    /// let array = SortedArray::parse(&[1, 2, 3, 4], Ascending).unwrap();
    /// let options = SearchOptions::new().range(..3).inclusive(false);
    /// assert_eq!(array.search(&4, options), None);
    /// assert_eq!(array.search(&2, options).unwrap().index, 2);
    /// ```
    pub fn search(&self, needle: &T, options: SearchOptions) -> Option<Found<'_, T>> {
        let (left, right) = options.resolve(self.len());
        trace!(
            left,
            right,
            direction = ?options.direction,
            inclusive = options.inclusive,
            "search"
        );
        if left >= right {
            return None;
        }
        let (lo, hi) = (left, right - 1);
        let index = match (options.direction, options.inclusive) {
            (Direction::Right, true) => self.first_not_less(needle, lo, hi),
            (Direction::Right, false) => self.first_greater(needle, lo, hi),
            (Direction::Left, true) => self.last_not_greater(needle, lo, hi),
            (Direction::Left, false) => self.last_less(needle, lo, hi),
        }?;
        Some(Found::new(&self.as_slice()[index], index))
    }

    /// Search rightwards starting at `from_index` (default `0`).
    pub fn search_right(
        &self,
        needle: &T,
        from_index: Option<usize>,
        inclusive: bool,
    ) -> Option<Found<'_, T>> {
        let options = SearchOptions {
            left: from_index,
            right: None,
            direction: Direction::Right,
            inclusive,
        };
        self.search(needle, options)
    }

    /// Search leftwards starting at `from_index` (default: the last index).
    pub fn search_left(
        &self,
        needle: &T,
        from_index: Option<usize>,
        inclusive: bool,
    ) -> Option<Found<'_, T>> {
        let options = SearchOptions {
            left: None,
            right: from_index.map(|index| index.saturating_add(1)),
            direction: Direction::Left,
            inclusive,
        };
        self.search(needle, options)
    }

    /// First element within the window, in the configured direction, that
    /// satisfies `predicate`. Linear in the size of the window.
    pub fn find_first<P>(&self, predicate: P, options: SearchOptions) -> Option<Found<'_, T>>
    where
        P: FnMut(&T, usize) -> bool,
    {
        linear_scan::find_first(self.as_slice(), predicate, options)
    }

    fn compare_at(&self, index: usize, needle: &T) -> Ordering {
        self.comparator.compare(&self.as_slice()[index], needle)
    }

    fn first_not_less(&self, needle: &T, lo: usize, hi: usize) -> Option<usize> {
        partition_first(lo, hi, |i| self.compare_at(i, needle) != Ordering::Less)
    }

    fn first_greater(&self, needle: &T, lo: usize, hi: usize) -> Option<usize> {
        partition_first(lo, hi, |i| self.compare_at(i, needle) == Ordering::Greater)
    }

    fn last_not_greater(&self, needle: &T, lo: usize, hi: usize) -> Option<usize> {
        partition_last(lo, hi, |i| self.compare_at(i, needle) != Ordering::Greater)
    }

    fn last_less(&self, needle: &T, lo: usize, hi: usize) -> Option<usize> {
        partition_last(lo, hi, |i| self.compare_at(i, needle) == Ordering::Less)
    }
}

impl<'s, T, C, S: Deref<Target = [T]>> IntoIterator for &'s SortedArray<T, C, S> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
