use crate::cards::Card;
use std::path::PathBuf;

/// Every way a sweep can fail.
///
/// None of these are retried. Configuration errors stop the run before
/// enumeration starts; the rest mean the engine or its inputs are wrong.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("failed to access [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read game file at line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("unsupported game: {0}")]
    Unsupported(String),
    #[error("invalid card notation: {0}")]
    Notation(String),
    #[error("card {0} is dealt to both seats")]
    Overlap(Card),
    #[error("result buffer write at offset {offset} exceeds capacity {capacity}")]
    Capacity { offset: usize, capacity: usize },
    #[error("unit {hand} wrote {written} of {expected} boards")]
    Incomplete {
        hand: usize,
        written: usize,
        expected: usize,
    },
    #[error("result buffer slot {offset} was never written")]
    Uncovered { offset: usize },
    #[error("malformed result buffer file: {0}")]
    Format(String),
}
