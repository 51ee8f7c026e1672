use std::fmt;
use std::iter::FusedIterator;

use super::heap_strategy::{HeapStrategy, MaxStrategy, MinStrategy};

#[inline(always)]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline(always)]
const fn right_child(index: usize) -> usize {
    2 * index + 2
}

////////////////
/// Only valid for index > 0
#[inline(always)]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

///////////////////////////////
/// Binary heap ordered by a predicate supplied at construction.
///
/// `higher_priority(a, b)` must hold when `a` belongs nearer the root than `b`,
/// and must describe a strict weak ordering. The root is whatever element no
/// other element outranks; with `|a, b| a > b` this is a max-heap, with
/// `|a, b| a < b` a min-heap.
///
/// Elements live in a `Vec` laid out as an implicit binary tree: the children
/// of index `i` are `2i + 1` and `2i + 2`. No element is ever strictly lower
/// priority than one of its children.
pub struct BinaryHeap<T, F = fn(&T, &T) -> bool>
where
    F: Fn(&T, &T) -> bool,
{
    elements: Vec<T>,
    higher_priority: F,
}

impl<T, F> BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    super::delegate! {
        to self.elements {
            #[inline] pub fn len(&self)                         -> usize;
            #[inline] pub fn is_empty(&self)                    -> bool;
            #[inline] pub fn capacity(&self)                    -> usize;
            #[inline] pub fn clear(&mut self);
            #[inline] pub fn reserve(&mut self, additional: usize);
            #[inline] pub fn shrink_to_fit(&mut self);

            //NOTE: storage order, NOT priority order. Use drain_sorted for the latter
            #[inline] pub fn iter(&self)                        -> std::slice::Iter<'_, T>;
        }
    }

    pub fn new(higher_priority: F) -> Self {
        Self {
            elements: Vec::new(),
            higher_priority,
        }
    }

    pub fn with_capacity(capacity: usize, higher_priority: F) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            higher_priority,
        }
    }

    /// Highest priority element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Push `value` as a new leaf and sift it up to where it belongs.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the highest priority element, or `None` if the heap is empty.
    pub fn extract_max(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }

        // the last leaf takes the place of the root
        let top = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    /// Iterator extracting elements in priority order. Elements not consumed
    /// stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, F> {
        DrainSorted { heap: self }
    }

    /// All elements, highest priority first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        sorted.extend(self.drain_sorted());
        sorted
    }

    /// Backing storage, in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Check that no element is strictly lower priority than one of its children.
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.elements.len()).all(|index| !self.is_higher_priority(index, parent(index)))
    }

    #[inline]
    fn is_higher_priority(&self, first: usize, second: usize) -> bool {
        (self.higher_priority)(&self.elements[first], &self.elements[second])
    }

    ////////////////
    /// Child of `index` to swap with, or None if `index` already outranks its children.
    ///
    /// When both children exist and either outranks the parent, the left child is
    /// taken only if it strictly outranks the right one. Equal children resolve to
    /// the right.
    fn child_to_promote(&self, index: usize) -> Option<usize> {
        let left = left_child(index);
        let right = right_child(index);
        let total = self.elements.len();

        if right < total {
            if self.is_higher_priority(left, index) || self.is_higher_priority(right, index) {
                if self.is_higher_priority(left, right) {
                    return Some(left);
                }
                return Some(right);
            }
            return None;
        }

        // a lone left child only occurs at the last internal node
        if left < total && self.is_higher_priority(left, index) {
            return Some(left);
        }
        None
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.is_higher_priority(index, parent) {
                break;
            }
            log::trace!("sift up: swap {} <-> {}", index, parent);
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.child_to_promote(index) {
            log::trace!("sift down: swap {} <-> {}", index, child);
            self.elements.swap(index, child);
            index = child;
        }
    }
}

impl<T> BinaryHeap<T>
where
    T: Ord,
{
    /// Heap ordered through `Ord`, with the root chosen by `S`.
    pub fn with_strategy<S: HeapStrategy<T>>() -> Self {
        Self::new(S::higher_priority)
    }

    pub fn max() -> Self {
        Self::with_strategy::<MaxStrategy>()
    }

    pub fn min() -> Self {
        Self::with_strategy::<MinStrategy>()
    }
}

impl<T, F> Extend<T> for BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    //NOTE: one insert per element, there is no bulk heapify
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, F> fmt::Debug for BinaryHeap<T, F>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<'a, T, F> IntoIterator for &'a BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///////////////////////////////
/// Iterator returned by [`BinaryHeap::drain_sorted`].
pub struct DrainSorted<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    heap: &'a mut BinaryHeap<T, F>,
}

impl<T, F> Iterator for DrainSorted<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.extract_max()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, F> ExactSizeIterator for DrainSorted<'_, T, F> where F: Fn(&T, &T) -> bool {}
impl<T, F> FusedIterator for DrainSorted<'_, T, F> where F: Fn(&T, &T) -> bool {}
