//! # edgecopy
//!
//! Copies directed edges onto the vertices they point at, as a
//! map/shuffle/merge transform over partitioned vertex records.
//!
//! ## Usage
//!
//! ```bash
//! edgecopy run --input vertices.jsonl --output copied.jsonl --direction out
//! ```
//!
//! ```
//! use edgecopy::graph::{Direction, Edge, Vertex};
//! use edgecopy::metrics::AtomicCounters;
//! use edgecopy::runtime::copy_edges;
//! use edgecopy::transform::{DirectionOption, EdgeCopyConfig};
//! use std::sync::Arc;
//!
//! let config = EdgeCopyConfig::new(DirectionOption::Out)?;
//! let a = Vertex::new(1).with_edge(Direction::Out, Edge::new("knows", 2).with_property("weight", 5));
//!
//! let output = copy_edges(&config, vec![a], Arc::new(AtomicCounters::new()));
//!
//! assert_eq!(output[1].id, 2);
//! assert_eq!(output[1].edges(Direction::In)[0].vertex_id, 1);
//! # Ok::<(), edgecopy::error::EdgeCopyError>(())
//! ```
//!
//! ## Modules
//!
//! - `graph` - Vertex, edge and property records
//! - `transform` - Emitter, merger and the tagged records between them
//! - `metrics` - Observer seam and counters
//! - `runtime` - In-memory shuffle and local parallel job runner
//! - `io` - JSON-lines vertex reader/writer
//! - `config` - Job configuration from file and environment
//! - `app` - Logging and process-level setup for the binary
//! - `error` - Unified error type
pub mod app;
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod runtime;
pub mod transform;


pub use error::{EdgeCopyError, Result};
