//! Reduce side of the edge copy transform

use super::config::{DirectionOption, EdgeCopyConfig};
use super::record::Tagged;
use crate::error::Result;
use crate::graph::{Vertex, VertexId};
use crate::metrics::{Counter, EdgeCopyObserver};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Folds every tagged record grouped under one key into a single vertex
///
/// Shell records contribute their copied edges; the real record contributes
/// the vertex's own properties and edges. The result is canonicalized, so it
/// does not depend on the order records arrive in.
pub struct Merger {
    config: EdgeCopyConfig,
    observer: Arc<dyn EdgeCopyObserver>,
}

impl Merger {
    pub fn new(config: &EdgeCopyConfig, observer: Arc<dyn EdgeCopyObserver>) -> Self {
        Self {
            config: *config,
            observer,
        }
    }

    /// Validate the raw direction option and build a merger
    pub fn setup(option: DirectionOption, observer: Arc<dyn EdgeCopyObserver>) -> Result<Self> {
        let config = EdgeCopyConfig::new(option)?;
        Ok(Self::new(&config, observer))
    }

    pub fn config(&self) -> &EdgeCopyConfig {
        &self.config
    }

    /// Merge one group into the output vertex for `key`
    ///
    /// A group without a real record still yields a vertex, holding only
    /// the copied edges. A vertex's own edges come back in canonical order,
    /// not in the order they arrived.
    pub fn reduce<I>(&self, key: VertexId, records: I) -> Vertex
    where
        I: IntoIterator<Item = Tagged>,
    {
        let reverse = self.config.reverse();
        let mut vertex = Vertex::new(key);
        let mut added = 0u64;
        let mut reals = 0usize;

        for record in records {
            match record {
                Tagged::Shell(shell) => {
                    added += shell.edge_count(reverse) as u64;
                    vertex.add_edges(reverse, &shell);
                }
                Tagged::Real(real) => {
                    reals += 1;
                    vertex.add_all(real);
                }
            }
        }

        match reals {
            0 => debug!(vertex = key, edges = added, "materialized vertex from shell records only"),
            1 => trace!(vertex = key, edges = added, "merged vertex"),
            n => warn!(vertex = key, reals = n, "group holds more than one real record"),
        }

        vertex.canonicalize();
        if added > 0 {
            self.observer.record(Counter::EdgesAdded, added);
        }
        vertex
    }
}
