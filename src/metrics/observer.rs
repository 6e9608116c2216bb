//! Observer seam between the transform and whatever sink collects its counts

use super::counters::Counter;
use std::sync::Arc;
use tracing::trace;

/// Receives counter increments from emitter and merger tasks
///
/// Implementations are shared between parallel tasks and must tolerate
/// concurrent calls.
pub trait EdgeCopyObserver: Send + Sync {
    fn record(&self, counter: Counter, value: u64);
}

/// Discards every increment
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EdgeCopyObserver for NoopObserver {
    fn record(&self, _counter: Counter, _value: u64) {}
}

/// Emits each increment as a trace event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl EdgeCopyObserver for TracingObserver {
    fn record(&self, counter: Counter, value: u64) {
        trace!(counter = counter.name(), value, "counter incremented");
    }
}

/// Forwards every increment to all registered observers
#[derive(Default, Clone)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn EdgeCopyObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Arc<dyn EdgeCopyObserver>) {
        self.observers.push(observer);
    }

    pub fn with(mut self, observer: Arc<dyn EdgeCopyObserver>) -> Self {
        self.register(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl EdgeCopyObserver for ObserverRegistry {
    fn record(&self, counter: Counter, value: u64) {
        for observer in &self.observers {
            observer.record(counter, value);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
