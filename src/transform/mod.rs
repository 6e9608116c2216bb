//! Edge copy transform
//!
//! Gives every vertex a reciprocal edge for each edge pointing at it, without
//! mutating the vertex that owns the original edge. It runs in two stages
//! joined by a keyed shuffle:
//!
//! ```text
//! vertices ─▶ Emitter ─▶ (key, Tagged) ─▶ shuffle by key ─▶ Merger ─▶ vertices
//! ```
//!
//! With direction OUT, an edge `1 -[knows]-> 2` makes the emitter send a
//! shell for vertex 2 holding `IN knows from 1`, plus vertex 1 itself under
//! key 1. The merger for key 2 then folds the shell into vertex 2.
//!
//! The transform is not idempotent. Running it twice with the same direction
//! copies every edge twice; no deduplication is attempted.

pub mod config;
pub mod emitter;
pub mod merger;
pub mod record;

pub use config::{DirectionOption, EdgeCopyConfig, DIRECTION_KEY};
pub use emitter::Emitter;
pub use merger::Merger;
pub use record::Tagged;
