//! Resolution outcome statistics.
//!
//! Thread-safe counters for the outcome of every resolution request, read by
//! the `/metrics` endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::Outcome;

/// Thread-safe outcome tracker.
///
/// Every `Outcome` variant gets a counter at construction, so lookups never
/// miss. Share it across handlers with `Arc`.
pub struct ResolverStats {
    outcomes: HashMap<Outcome, AtomicUsize>,
}

impl ResolverStats {
    /// Creates a tracker with every outcome counter at zero.
    pub fn new() -> Self {
        let outcomes = Outcome::iter()
            .map(|outcome| (outcome, AtomicUsize::new(0)))
            .collect();
        ResolverStats { outcomes }
    }

    /// Records one finished request.
    pub fn record(&self, outcome: Outcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record outcome {:?} which is not in the map. \
                 This indicates a bug in ResolverStats initialization.",
                outcome
            );
        }
    }

    /// Current count for one outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total number of requests recorded across all outcomes.
    pub fn total(&self) -> usize {
        self.outcomes
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }
}

impl Default for ResolverStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = ResolverStats::new();
        for outcome in Outcome::iter() {
            assert_eq!(stats.count(outcome), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_record_and_total() {
        let stats = ResolverStats::new();
        stats.record(Outcome::Resolved);
        stats.record(Outcome::Resolved);
        stats.record(Outcome::BlockedUrl);

        assert_eq!(stats.count(Outcome::Resolved), 2);
        assert_eq!(stats.count(Outcome::BlockedUrl), 1);
        assert_eq!(stats.count(Outcome::MissingUrl), 0);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_concurrent_recording() {
        let stats = Arc::new(ResolverStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.record(Outcome::TooManyRedirects);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("recording thread panicked");
        }
        assert_eq!(stats.count(Outcome::TooManyRedirects), 800);
    }
}
