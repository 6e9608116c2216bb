//! Monotonic counters reported by the transform

use super::observer::EdgeCopyObserver;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters the emitter and merger report through an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    /// Shell records produced on the map side
    EdgesCopied,
    /// Edges merged from shell records on the reduce side
    EdgesAdded,
}

impl Counter {
    pub const ALL: [Counter; 2] = [Counter::EdgesCopied, Counter::EdgesAdded];

    /// Stable metric name for external sinks
    pub fn name(self) -> &'static str {
        match self {
            Self::EdgesCopied => "edges_copied",
            Self::EdgesAdded => "edges_added",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lock-free counter totals, shareable across tasks
#[derive(Debug, Default)]
pub struct AtomicCounters {
    edges_copied: AtomicU64,
    edges_added: AtomicU64,
}

impl AtomicCounters {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, counter: Counter) -> &AtomicU64 {
        match counter {
            Counter::EdgesCopied => &self.edges_copied,
            Counter::EdgesAdded => &self.edges_added,
        }
    }

    pub fn get(&self, counter: Counter) -> u64 {
        // Totals are only read once the owning tasks have been joined.
        self.slot(counter).load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            edges_copied: self.get(Counter::EdgesCopied),
            edges_added: self.get(Counter::EdgesAdded),
            recorded_at: Utc::now(),
        }
    }
}

impl EdgeCopyObserver for AtomicCounters {
    fn record(&self, counter: Counter, value: u64) {
        self.slot(counter).fetch_add(value, Ordering::Relaxed);
    }
}

/// Point-in-time copy of the counter totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub edges_copied: u64,
    pub edges_added: u64,
    pub recorded_at: DateTime<Utc>,
}

impl CounterSnapshot {
    pub fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::EdgesCopied => self.edges_copied,
            Counter::EdgesAdded => self.edges_added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_counter_names() {
        assert_eq!(Counter::EdgesCopied.name(), "edges_copied");
        assert_eq!(Counter::EdgesAdded.to_string(), "edges_added");
    }

    #[test]
    fn test_atomic_counters_accumulate() {
        let counters = AtomicCounters::new();
        counters.record(Counter::EdgesCopied, 3);
        counters.record(Counter::EdgesCopied, 2);
        counters.record(Counter::EdgesAdded, 1);

        let snapshot = counters.snapshot();
        assert_eq!(snapshot.edges_copied, 5);
        assert_eq!(snapshot.get(Counter::EdgesAdded), 1);
    }

    #[test]
    fn test_atomic_counters_across_threads() {
        let counters = Arc::new(AtomicCounters::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counters = Arc::clone(&counters);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        counters.record(Counter::EdgesAdded, 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.get(Counter::EdgesAdded), 800);
        assert_eq!(counters.get(Counter::EdgesCopied), 0);
    }

    #[test]
    fn test_snapshot_serializes_metric_names() {
        let counters = AtomicCounters::new();
        counters.record(Counter::EdgesCopied, 4);
        let json = serde_json::to_value(counters.snapshot()).unwrap();
        assert_eq!(json["edges_copied"], 4);
        assert_eq!(json["edges_added"], 0);
        assert!(json["recorded_at"].is_string());
    }
}
