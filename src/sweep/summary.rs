use super::engine::Mode;
use super::engine::Report;
use super::tally::Tally;
use crate::Equity;
use crate::SweepError;
use crate::cards::Hole;
use crate::catalog::Catalog;
use crate::catalog::Category;
use std::path::Path;
use std::time::Duration;

/// One catalog entry's line in the summary.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Entry {
    label: String,
    hole: String,
    category: Category,
    equity: Equity,
    #[serde(flatten)]
    tally: Tally,
}

/// Machine-readable record of a finished sweep.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Summary {
    opponent: String,
    mode: Mode,
    threads: usize,
    seconds: f64,
    hands: Vec<Entry>,
    total: Tally,
}

impl Summary {
    pub fn new(
        catalog: &Catalog,
        opponent: Hole,
        report: &Report,
        mode: Mode,
        threads: usize,
        elapsed: Duration,
    ) -> Self {
        let hands = catalog
            .iter()
            .zip(report.tallies())
            .map(|(hole, tally)| Entry {
                label: Category::label(hole),
                hole: hole.to_string(),
                category: Category::from(*hole),
                equity: tally.equity(),
                tally: *tally,
            })
            .collect();
        Self {
            opponent: opponent.to_string(),
            mode,
            threads: match mode {
                Mode::Sequential => 1,
                Mode::Parallel => threads,
            },
            seconds: elapsed.as_secs_f64(),
            hands,
            total: report.total(),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SweepError> {
        use std::io::Write;
        let path = path.as_ref();
        let io = |source: std::io::Error| SweepError::Io {
            path: path.to_path_buf(),
            source,
        };
        log::info!("{:<32}{:<32}", "saving      summary", path.display());
        let ref mut file = std::io::BufWriter::new(std::fs::File::create(path).map_err(io)?);
        serde_json::to_writer_pretty(&mut *file, self).map_err(|e| io(std::io::Error::from(e)))?;
        file.flush().map_err(io)
    }
}
