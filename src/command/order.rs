use crate::heap::BinaryHeap;

///////////////////////////////
/// Which end of the integers sits at the root
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeapOrder {
    #[default]
    Max,
    Min,
}

impl std::str::FromStr for HeapOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let order = match s.to_lowercase().as_str() {
            "max" | "desc" | "descending" => HeapOrder::Max,
            "min" | "asc" | "ascending" => HeapOrder::Min,
            _ => return Err(format!("Invalid heap order: {}", s)),
        };
        Ok(order)
    }
}

impl HeapOrder {
    pub fn new_heap<T: Ord>(self) -> BinaryHeap<T> {
        match self {
            HeapOrder::Max => BinaryHeap::max(),
            HeapOrder::Min => BinaryHeap::min(),
        }
    }
}
