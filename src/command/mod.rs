pub mod demo;
pub mod order;
pub mod run;
pub mod sort;

pub use demo::DemoCMD;
pub use order::HeapOrder;
pub use run::HeapOp;
pub use run::RunCMD;
pub use sort::HeapSort;
pub use sort::SortCMD;
