use clap::Args;
use itertools::Itertools;

use crate::heap::BinaryHeap;
use crate::runtime::{self, Config};

///////////////////////////////
/// One step of a heap script
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapOp {
    Insert(i64),
    Extract,
    Peek,
    Len,
}

impl std::str::FromStr for HeapOp {
    type Err = runtime::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.to_lowercase().as_str() {
            "pop" | "x" | "extract" => HeapOp::Extract,
            "peek" | "p" => HeapOp::Peek,
            "len" => HeapOp::Len,
            token => match token.parse::<i64>() {
                Ok(value) => HeapOp::Insert(value),
                Err(_) => {
                    return Err(runtime::Error::parse_error(
                        format!("token '{}'", s),
                        Some("expected an integer, pop, peek or len"),
                    ))
                }
            },
        };
        Ok(op)
    }
}

#[derive(Args)]
pub struct RunCMD {
    // Script tokens: an integer inserts it, pop|x extracts, peek|p peeks, len prints the size
    #[arg(required = true, allow_negative_numbers = true)]
    pub ops: Vec<String>,
}

impl RunCMD {
    /// Run the commandline option.
    /// Interprets the script against an integer heap and prints every query result
    pub fn try_execute(&mut self) -> anyhow::Result<()> {
        let ops = parse_script(&self.ops)?;
        log::debug!("Parsed {} script steps", ops.len());

        let mut heap = Config::current_order().new_heap();
        for line in run_script(&mut heap, &ops) {
            println!("{}", line);
        }
        println!("heap: [{}]", heap.iter().join(", "));

        log::info!("Run has finished successfully");
        Ok(())
    }
}

pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<HeapOp>, runtime::Error> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

////////////////
/// Apply `ops` in order. Inserts are silent, every other step yields one line
pub fn run_script<F>(heap: &mut BinaryHeap<i64, F>, ops: &[HeapOp]) -> Vec<String>
where
    F: Fn(&i64, &i64) -> bool,
{
    let mut lines = Vec::new();
    for op in ops {
        match *op {
            HeapOp::Insert(value) => heap.insert(value),
            HeapOp::Extract => lines.push(format!("extract -> {:?}", heap.extract_max())),
            HeapOp::Peek => lines.push(format!("peek -> {:?}", heap.peek())),
            HeapOp::Len => lines.push(format!("len -> {}", heap.len())),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::HeapOrder;

    #[test]
    fn test_parse_tokens() {
        let ops = parse_script(&["5", "-3", "pop", "X", "p", "len"]).unwrap();
        assert_eq!(
            ops,
            vec![
                HeapOp::Insert(5),
                HeapOp::Insert(-3),
                HeapOp::Extract,
                HeapOp::Extract,
                HeapOp::Peek,
                HeapOp::Len,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = parse_script(&["1", "push"]).unwrap_err();
        assert!(matches!(err, runtime::Error::ParseError { .. }));
        assert!(err.to_string().contains("'push'"));
    }

    #[test]
    fn test_run_script() {
        let ops = parse_script(&["pop", "2", "4", "9", "peek", "len", "pop", "p", "len"]).unwrap();
        let mut heap = HeapOrder::Max.new_heap();
        let lines = run_script(&mut heap, &ops);
        assert_eq!(
            lines,
            vec![
                "extract -> None",
                "peek -> Some(9)",
                "len -> 3",
                "extract -> Some(9)",
                "peek -> Some(4)",
                "len -> 2",
            ]
        );
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_run_script_min() {
        let ops = parse_script(&["7", "-1", "3", "pop", "pop"]).unwrap();
        let mut heap = HeapOrder::Min.new_heap();
        let lines = run_script(&mut heap, &ops);
        assert_eq!(lines, vec!["extract -> Some(-1)", "extract -> Some(3)"]);
    }
}
