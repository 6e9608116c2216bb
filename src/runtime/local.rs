//! Single-machine job runner
//!
//! Runs map tasks over contiguous input splits and reduce tasks over shuffle
//! partitions, each on tokio's blocking pool. Joining all map tasks is the
//! barrier before any reduce task starts.

use super::shuffle::{Grouping, InMemoryShuffle};
use crate::config::JobConfig;
use crate::error::Result;
use crate::graph::Vertex;
use crate::metrics::{AtomicCounters, CounterSnapshot, EdgeCopyObserver, ObserverRegistry};
use crate::transform::{EdgeCopyConfig, Emitter, Merger};
use futures::future::try_join_all;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task;
use tracing::{debug, info};

pub const DEFAULT_MAP_TASKS: usize = 4;
pub const DEFAULT_REDUCE_TASKS: usize = 4;

/// Outcome of a local job
#[derive(Debug, Clone)]
pub struct JobReport {
    /// Output vertices sorted by id
    pub vertices: Vec<Vertex>,
    pub counters: CounterSnapshot,
    pub input_vertices: usize,
    pub shuffled_records: usize,
    pub duration: Duration,
}

/// Runs the edge copy transform with in-process parallelism
#[derive(Debug, Clone)]
pub struct LocalJob {
    config: EdgeCopyConfig,
    map_tasks: usize,
    reduce_tasks: usize,
    observers: ObserverRegistry,
}

impl LocalJob {
    pub fn new(config: EdgeCopyConfig) -> Self {
        Self {
            config,
            map_tasks: DEFAULT_MAP_TASKS,
            reduce_tasks: DEFAULT_REDUCE_TASKS,
            observers: ObserverRegistry::new(),
        }
    }

    /// Build a job from loaded settings, validating the copy direction
    pub fn from_config(settings: &JobConfig) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(settings.edge_copy_config()?)
            .with_map_tasks(settings.job.map_tasks)
            .with_reduce_tasks(settings.job.reduce_tasks))
    }

    pub fn with_map_tasks(mut self, tasks: usize) -> Self {
        self.map_tasks = tasks.max(1);
        self
    }

    pub fn with_reduce_tasks(mut self, tasks: usize) -> Self {
        self.reduce_tasks = tasks.max(1);
        self
    }

    /// Report counter increments to `observer` in addition to the job's own totals
    pub fn with_observer(mut self, observer: Arc<dyn EdgeCopyObserver>) -> Self {
        self.observers.register(observer);
        self
    }

    pub fn config(&self) -> &EdgeCopyConfig {
        &self.config
    }

    pub async fn run(&self, vertices: Vec<Vertex>) -> Result<JobReport> {
        let started = Instant::now();
        let counters = Arc::new(AtomicCounters::new());
        let observer: Arc<dyn EdgeCopyObserver> =
            Arc::new(self.observers.clone().with(counters.clone()));
        let input_vertices = vertices.len();

        info!(
            direction = %self.config.direction(),
            vertices = input_vertices,
            map_tasks = self.map_tasks,
            reduce_tasks = self.reduce_tasks,
            "starting edge copy job"
        );

        let shuffle = self.map_phase(vertices, observer.clone()).await?;
        let shuffled_records = shuffle.len();
        info!(
            records = shuffled_records,
            keys = shuffle.key_count(),
            "map phase complete"
        );

        let output = self.reduce_phase(shuffle, observer).await?;
        let counters = counters.snapshot();
        info!(
            vertices = output.len(),
            edges_copied = counters.edges_copied,
            edges_added = counters.edges_added,
            "reduce phase complete"
        );

        Ok(JobReport {
            vertices: output,
            counters,
            input_vertices,
            shuffled_records,
            duration: started.elapsed(),
        })
    }

    async fn map_phase(
        &self,
        vertices: Vec<Vertex>,
        observer: Arc<dyn EdgeCopyObserver>,
    ) -> Result<InMemoryShuffle> {
        let splits = split_input(vertices, self.map_tasks);
        let handles = splits.into_iter().enumerate().map(|(index, split)| {
            let config = self.config;
            let observer = observer.clone();
            let partitions = self.reduce_tasks;
            task::spawn_blocking(move || {
                let mut emitter = Emitter::new(&config, observer);
                let mut shuffle = InMemoryShuffle::new(partitions);
                let split_len = split.len();
                for vertex in split {
                    let emitted: std::result::Result<u64, Infallible> =
                        emitter.map(vertex, |key, record| {
                            shuffle.push(key, record.clone());
                            Ok(())
                        });
                    if let Err(never) = emitted {
                        match never {}
                    }
                }
                debug!(
                    task = index,
                    vertices = split_len,
                    records = shuffle.len(),
                    "map task finished"
                );
                shuffle
            })
        });

        let outputs = try_join_all(handles).await?;
        let mut shuffle = InMemoryShuffle::new(self.reduce_tasks);
        for output in outputs {
            shuffle.merge(output);
        }
        Ok(shuffle)
    }

    async fn reduce_phase(
        &self,
        shuffle: InMemoryShuffle,
        observer: Arc<dyn EdgeCopyObserver>,
    ) -> Result<Vec<Vertex>> {
        let handles = shuffle
            .into_partitions()
            .into_iter()
            .enumerate()
            .map(|(index, partition)| {
                let config = self.config;
                let observer = observer.clone();
                task::spawn_blocking(move || {
                    let merger = Merger::new(&config, observer);
                    let output: Vec<Vertex> = partition
                        .into_iter()
                        .map(|(key, records)| merger.reduce(key, records))
                        .collect();
                    debug!(task = index, vertices = output.len(), "reduce task finished");
                    output
                })
            });

        let outputs = try_join_all(handles).await?;
        let mut vertices: Vec<Vertex> = outputs.into_iter().flatten().collect();
        vertices.sort_by_key(|v| v.id);
        Ok(vertices)
    }
}

/// Run the transform on the current thread through a single-partition shuffle
pub fn copy_edges<I>(
    config: &EdgeCopyConfig,
    vertices: I,
    observer: Arc<dyn EdgeCopyObserver>,
) -> Vec<Vertex>
where
    I: IntoIterator<Item = Vertex>,
{
    let mut emitter = Emitter::new(config, observer.clone());
    let mut shuffle = InMemoryShuffle::new(1);
    for vertex in vertices {
        for (key, record) in emitter.map_owned(vertex) {
            shuffle.push(key, record);
        }
    }

    let merger = Merger::new(config, observer);
    let mut output: Vec<Vertex> = shuffle
        .into_groups()
        .map(|(key, records)| merger.reduce(key, records))
        .collect();
    output.sort_by_key(|v| v.id);
    output
}

fn split_input(vertices: Vec<Vertex>, tasks: usize) -> Vec<Vec<Vertex>> {
    let size = vertices.len().div_ceil(tasks.max(1)).max(1);
    let mut splits = Vec::with_capacity(tasks);
    let mut remaining = vertices.into_iter().peekable();
    while remaining.peek().is_some() {
        splits.push(remaining.by_ref().take(size).collect());
    }
    splits
}
