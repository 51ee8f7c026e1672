mod binary_heap;
mod heap_strategy;

pub(crate) use delegate::delegate;

pub use binary_heap::BinaryHeap;
pub use binary_heap::DrainSorted;
pub use heap_strategy::MaxStrategy;
pub use heap_strategy::MinStrategy;

pub mod prelude {
    pub use super::heap_strategy::HeapStrategy;
}
pub use prelude::*;
