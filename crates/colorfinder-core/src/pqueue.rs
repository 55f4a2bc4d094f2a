//! Priority queue with lazy, stable re-sorting
//!
//! Entries are kept in a vector that is sorted ascending by the
//! comparator only when it is read after a mutation. The maximum entry is
//! therefore the last one. Sorting is stable, so entries that compare
//! equal keep their insertion order and repeated runs are reproducible.

use std::cmp::Ordering;

/// Reorderable collection ordered by a caller-supplied comparator.
pub struct PQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    contents: Vec<T>,
    sorted: bool,
    comparator: F,
}

impl<T, F> PQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `comparator`
    pub fn new(comparator: F) -> Self {
        Self {
            contents: Vec::new(),
            sorted: true,
            comparator,
        }
    }

    fn sort(&mut self) {
        if !self.sorted {
            let comparator = &self.comparator;
            self.contents.sort_by(|a, b| comparator(a, b));
            self.sorted = true;
        }
    }

    /// Append an entry
    pub fn push(&mut self, item: T) {
        self.contents.push(item);
        self.sorted = false;
    }

    /// Entry at `index` in ascending order
    pub fn peek(&mut self, index: usize) -> Option<&T> {
        self.sort();
        self.contents.get(index)
    }

    /// Largest entry without removing it
    pub fn peek_last(&mut self) -> Option<&T> {
        self.sort();
        self.contents.last()
    }

    /// Remove and return the largest entry
    pub fn pop(&mut self) -> Option<T> {
        self.sort();
        self.contents.pop()
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Project every entry, in ascending order
    pub fn map<U>(&mut self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.sort();
        self.contents.iter().map(f).collect()
    }

    /// Consume the queue, returning entries in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.sort();
        self.contents
    }
}

impl<T, F> std::fmt::Debug for PQueue<T, F>
where
    T: std::fmt::Debug,
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PQueue")
            .field("contents", &self.contents)
            .field("sorted", &self.sorted)
            .finish()
    }
}
