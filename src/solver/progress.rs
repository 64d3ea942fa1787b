//! Live search counters
//!
//! Updated from every line task. Values may lag while a search is running
//! and are exact once it returns.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Shared progress handle for a running search
#[derive(Debug, Default)]
pub struct Progress {
    cells_examined: AtomicUsize,
    words_checked: AtomicUsize,
    total_cells: AtomicUsize,
    cancelled: AtomicBool,
    timed_out: AtomicBool,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub cells_examined: usize,
    pub words_checked: usize,
    pub total_cells: usize,
}

impl ProgressSnapshot {
    /// Fraction of cells examined, in `[0, 1]`
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        (self.cells_examined as f64 / self.total_cells as f64).min(1.0)
    }
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the counters and set the expected total for a new search
    ///
    /// A pending [`cancel`](Self::cancel) survives the reset; only
    /// [`resume`](Self::resume) clears it.
    pub fn reset(&self, total_cells: usize) {
        self.cells_examined.store(0, Ordering::Relaxed);
        self.words_checked.store(0, Ordering::Relaxed);
        self.timed_out.store(false, Ordering::Relaxed);
        self.total_cells.store(total_cells, Ordering::Relaxed);
    }

    #[inline]
    pub fn add_cells(&self, count: usize) {
        self.cells_examined.fetch_add(count, Ordering::Relaxed);
    }

    #[inline]
    pub fn add_word(&self) {
        self.words_checked.fetch_add(1, Ordering::Relaxed);
    }

    /// Stop the current or next search before its next line
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Re-arm the handle after a [`cancel`](Self::cancel)
    pub fn resume(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Mark the current search as out of time
    pub fn time_out(&self) {
        self.timed_out.store(true, Ordering::Relaxed);
    }

    /// Whether the last search stopped early, by cancel or by time budget
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.is_cancelled() || self.timed_out.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            cells_examined: self.cells_examined.load(Ordering::Relaxed),
            words_checked: self.words_checked.load(Ordering::Relaxed),
            total_cells: self.total_cells.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn concurrent_increments_are_exact() {
        let progress = Progress::new();
        progress.reset(1000);

        (0..1000).into_par_iter().for_each(|_| {
            progress.add_cells(1);
            progress.add_word();
        });

        let snapshot = progress.snapshot();
        assert_eq!(snapshot.cells_examined, 1000);
        assert_eq!(snapshot.words_checked, 1000);
        assert!((snapshot.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_clears_counters() {
        let progress = Progress::new();
        progress.add_cells(5);
        progress.time_out();
        progress.reset(10);

        assert_eq!(
            progress.snapshot(),
            ProgressSnapshot {
                cells_examined: 0,
                words_checked: 0,
                total_cells: 10,
            }
        );
        assert!(!progress.is_interrupted());
    }

    #[test]
    fn cancel_survives_reset_until_resumed() {
        let progress = Progress::new();
        progress.cancel();
        progress.reset(10);
        assert!(progress.is_cancelled());
        assert!(progress.is_interrupted());

        progress.resume();
        assert!(!progress.is_cancelled());
        assert!(!progress.is_interrupted());
    }

    #[test]
    fn fraction_handles_zero_total() {
        assert!(ProgressSnapshot::default().fraction().abs() < f64::EPSILON);
    }
}
