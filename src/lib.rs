pub mod command;
pub mod heap;
pub mod runtime;

pub use heap::BinaryHeap;
pub use heap::DrainSorted;
pub use heap::HeapStrategy;
pub use heap::MaxStrategy;
pub use heap::MinStrategy;
