//! Map side of the edge copy transform

use super::config::{DirectionOption, EdgeCopyConfig};
use super::record::Tagged;
use crate::error::Result;
use crate::graph::{Vertex, VertexId};
use crate::metrics::{Counter, EdgeCopyObserver};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::trace;

/// Turns each input vertex into keyed tagged records
///
/// For every edge of the vertex in the configured direction, a shell vertex
/// keyed by the edge's other endpoint is emitted holding the reciprocal edge.
/// The vertex itself is then emitted once, unmodified, under its own id.
///
/// The shell buffer is reused across emissions. The `emit` callback only
/// borrows each record, so a consumer that keeps a record past the callback
/// has to clone it.
pub struct Emitter {
    config: EdgeCopyConfig,
    observer: Arc<dyn EdgeCopyObserver>,
    shell: Vertex,
}

impl Emitter {
    pub fn new(config: &EdgeCopyConfig, observer: Arc<dyn EdgeCopyObserver>) -> Self {
        Self {
            config: *config,
            observer,
            shell: Vertex::new(0),
        }
    }

    /// Validate the raw direction option and build an emitter
    ///
    /// Fails with a configuration error for `Both`, before any vertex is seen.
    pub fn setup(option: DirectionOption, observer: Arc<dyn EdgeCopyObserver>) -> Result<Self> {
        let config = EdgeCopyConfig::new(option)?;
        Ok(Self::new(&config, observer))
    }

    pub fn config(&self) -> &EdgeCopyConfig {
        &self.config
    }

    /// Emit the records for one vertex through `emit`
    ///
    /// Returns the number of shell records emitted. An error from `emit`
    /// stops emission for this vertex and is returned as is; the counter is
    /// not incremented in that case.
    pub fn map<F, E>(&mut self, vertex: Vertex, mut emit: F) -> std::result::Result<u64, E>
    where
        F: FnMut(VertexId, &Tagged) -> std::result::Result<(), E>,
    {
        let direction = self.config.direction();
        let reverse = self.config.reverse();
        let mut copied = 0u64;

        for edge in vertex.edges(direction) {
            let mut shell = std::mem::replace(&mut self.shell, Vertex::new(0));
            shell.reset(edge.vertex_id);
            shell.add_edge(reverse, edge.reciprocal(vertex.id));

            let record = Tagged::Shell(shell);
            let sent = emit(edge.vertex_id, &record);
            self.shell = record.into_vertex();
            sent?;
            copied += 1;
        }

        let id = vertex.id;
        emit(id, &Tagged::Real(vertex))?;

        trace!(vertex = id, shells = copied, "emitted vertex");
        if copied > 0 {
            self.observer.record(Counter::EdgesCopied, copied);
        }
        Ok(copied)
    }

    /// Like [`Emitter::map`], but clones every record into an owned list
    pub fn map_owned(&mut self, vertex: Vertex) -> Vec<(VertexId, Tagged)> {
        let mut records = Vec::with_capacity(vertex.edge_count(self.config.direction()) + 1);
        let result: std::result::Result<u64, Infallible> = self.map(vertex, |key, record| {
            records.push((key, record.clone()));
            Ok(())
        });
        match result {
            Ok(_) => records,
            Err(never) => match never {},
        }
    }
}
