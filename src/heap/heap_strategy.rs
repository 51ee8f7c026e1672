use std::cmp::Ordering;

/// Picks which end of an `Ord` type sits at the root of a [`super::BinaryHeap`].
pub trait HeapStrategy<T>
where
    T: Ord,
{
    // `a` is nearer the root than `b` iff a.cmp(&b) == ORDERING
    const ORDERING: Ordering;

    #[inline]
    fn higher_priority(a: &T, b: &T) -> bool {
        a.cmp(b) == Self::ORDERING
    }
}

/// Largest element first.
pub struct MaxStrategy;
impl<T> HeapStrategy<T> for MaxStrategy
where
    T: Ord,
{
    const ORDERING: Ordering = Ordering::Greater;
}

/// Smallest element first.
pub struct MinStrategy;
impl<T> HeapStrategy<T> for MinStrategy
where
    T: Ord,
{
    const ORDERING: Ordering = Ordering::Less;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_strategy() {
        assert!(<MaxStrategy as HeapStrategy<i32>>::higher_priority(&3, &2));
        assert!(!<MaxStrategy as HeapStrategy<i32>>::higher_priority(&2, &3));
        assert!(!<MaxStrategy as HeapStrategy<i32>>::higher_priority(&2, &2));
    }

    #[test]
    fn test_min_strategy() {
        assert!(<MinStrategy as HeapStrategy<&str>>::higher_priority(&"a", &"b"));
        assert!(!<MinStrategy as HeapStrategy<&str>>::higher_priority(&"b", &"a"));
        assert!(!<MinStrategy as HeapStrategy<&str>>::higher_priority(&"a", &"a"));
    }
}
