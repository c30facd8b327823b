use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Shared progress counter for a long enumeration.
///
/// Any number of sweep units may tick concurrently. A line is logged each
/// time the count crosses one of `n` evenly spaced checkpoints.
pub struct Progress {
    total: usize,
    check: usize,
    ticks: AtomicUsize,
    begin: Instant,
}

impl Progress {
    pub fn new(total: usize, n: usize) -> Self {
        Self {
            total,
            check: (total / n.max(1)).max(1),
            ticks: AtomicUsize::new(0),
            begin: Instant::now(),
        }
    }
    pub fn tick(&self, n: usize) {
        let before = self.ticks.fetch_add(n, Ordering::Relaxed);
        let after = before + n;
        if before / self.check != after / self.check {
            let elapsed = self.begin.elapsed();
            log::info!(
                "progress: {:8.0?} {:>12} {:6.2}%   mean {:10.0}/s",
                elapsed,
                after,
                after as f32 / self.total.max(1) as f32 * 100f32,
                after as f32 / elapsed.as_secs_f32(),
            );
        }
    }
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }
}
