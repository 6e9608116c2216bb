//! Counter reporting for the edge copy transform
//!
//! The emitter and merger never touch shared globals; they report through
//! an injected [`EdgeCopyObserver`]. [`AtomicCounters`] is the in-process
//! sink used by the local runtime and the CLI.

pub mod counters;
pub mod observer;

pub use counters::{AtomicCounters, Counter, CounterSnapshot};
pub use observer::{EdgeCopyObserver, NoopObserver, ObserverRegistry, TracingObserver};
