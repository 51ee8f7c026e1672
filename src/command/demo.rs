use clap::Args;

use crate::command::HeapOrder;
use crate::heap::BinaryHeap;
use crate::runtime::Config;

#[derive(Args)]
pub struct DemoCMD {}

impl DemoCMD {
    /// Run the commandline option.
    /// Replays a fixed insert/extract script and prints the heap after every step
    pub fn try_execute(&mut self) -> anyhow::Result<()> {
        let order = Config::current_order();
        log::debug!("Running demo with order {:?}", order);

        for line in run_demo(order) {
            println!("{}", line);
        }

        log::info!("Demo has finished successfully");
        Ok(())
    }
}

////////////////
/// The scripted session, one output line per step
pub fn run_demo(order: HeapOrder) -> Vec<String> {
    let mut heap: BinaryHeap<i64> = order.new_heap();
    let mut lines = Vec::new();

    lines.push(format!("extract -> {:?}", heap.extract_max()));
    lines.push(format!("heap: {:?}", heap));

    heap.extend([2, 4, 9, 6, 3]);
    lines.push(format!("heap: {:?}", heap));

    lines.push(format!("extract -> {:?}", heap.extract_max()));
    lines.push(format!("heap: {:?}", heap));

    heap.insert(5);
    lines.push(format!("heap: {:?}", heap));
    heap.insert(4);
    lines.push(format!("heap: {:?}", heap));

    for _ in 0..4 {
        lines.push(format!("extract -> {:?}", heap.extract_max()));
        lines.push(format!("heap: {:?}", heap));
    }
    lines
}
