use crate::error::HeapError;
use crate::options::{initial_slots, HeapOptions, DEFAULT_SLOTS};
use std::fmt::{self, Debug};

/// A binary heap ordered by a caller-supplied `less` predicate.
///
/// The root is the element no other element is `less` than, so `|a, b| a < b`
/// pops in ascending order and `|a, b| a > b` in descending order.
///
/// With a limit the heap never holds more than `limit` elements. Once a push
/// overflows it, the last slot is discarded after giving it one chance to
/// replace its left sibling. That is a constant-time local decision, not a
/// search for the globally worst element.
///
/// The predicate may panic. The panic reaches the caller of `push` or `pop`
/// with every element still owned by the heap, but heap order is not restored.
pub struct PriorityHeap<T, F> {
    less: F,
    limit: Option<usize>,
    heap: Vec<T>,
}

impl<T, F> PriorityHeap<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(less: F, limit: Option<usize>) -> Result<Self, HeapError> {
        let slots = initial_slots(limit)?;
        Ok(Self::with_slots(less, limit, slots))
    }
    pub fn unbounded(less: F) -> Self {
        Self::with_slots(less, None, DEFAULT_SLOTS)
    }
    fn with_slots(less: F, limit: Option<usize>, slots: usize) -> Self {
        match limit {
            Some(limit) => log::debug!("Create bounded heap, limit {limit}."),
            None => log::debug!("Create unbounded heap."),
        }
        Self {
            less,
            limit,
            // slot 0 of the layout is the sentinel and is never materialized;
            // past `DEFAULT_SLOTS` the storage grows on demand up to the limit
            heap: Vec::with_capacity(slots.min(DEFAULT_SLOTS) - 1),
        }
    }
    pub fn with_options(less: F, options: &HeapOptions) -> Result<Self, HeapError> {
        options.check()?;
        Self::new(less, options.limit.map(|limit| limit as usize))
    }
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
        if let Some(limit) = self.limit {
            if self.heap.len() > limit {
                self.evict();
            }
        }
    }
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.heap.is_empty() {
            return Err(HeapError::EmptyQueue);
        }
        let top = self.heap.swap_remove(0);
        self.sink_down(0);
        Ok(top)
    }
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.heap.first().ok_or(HeapError::EmptyQueue)
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
    /// Copies out the live elements in storage order, which is not sorted.
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.heap.clone()
    }
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(x) = self.pop() {
            sorted.push(x);
        }
        sorted
    }

    // Positions are 0-based here: the parent of `i` is `(i - 1) / 2` and its
    // children are `2 * i + 1` and `2 * i + 2`.

    /// `heap[i]` does not strictly precede `heap[j]`.
    fn gt(&mut self, i: usize, j: usize) -> bool {
        !(self.less)(&self.heap[i], &self.heap[j])
    }
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if !self.gt(p, i) {
                break;
            }
            self.heap.swap(p, i);
            i = p;
        }
    }
    fn sink_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut min = i;
            if l < n && self.gt(min, l) {
                min = l;
            }
            if r < n && self.gt(min, r) {
                min = r;
            }
            if min == i {
                break;
            }
            self.heap.swap(i, min);
            i = min;
        }
    }
    fn evict(&mut self) {
        let last = self.heap.len() - 1;
        // a right child sits at an even position and shares its parent with `last - 1`
        if last > 0 && last % 2 == 0 && self.gt(last - 1, last) {
            self.heap.swap(last - 1, last);
        }
        self.heap.pop();
        log::trace!("Evicted an element, {} remain.", self.heap.len());
    }
}

impl<T, F> Extend<T> for PriorityHeap<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<T: Debug, F> Debug for PriorityHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("limit", &self.limit)
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
