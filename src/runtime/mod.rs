//! Execution runtime for the edge copy transform
//!
//! The transform only needs a [`Grouping`] between its two stages. This
//! module provides an in-memory one and a runner that drives map and reduce
//! tasks in parallel on a single machine.

pub mod local;
pub mod shuffle;

pub use local::{copy_edges, JobReport, LocalJob};
pub use shuffle::{Grouping, HashPartitioner, InMemoryShuffle};
