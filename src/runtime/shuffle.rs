//! Grouping of emitted records by key

use crate::graph::VertexId;
use crate::transform::Tagged;
use std::collections::HashMap;

/// Collects keyed records and hands them back grouped by key
///
/// No ordering is promised, neither between groups nor among the records
/// of one group.
pub trait Grouping {
    type Groups: Iterator<Item = (VertexId, Vec<Tagged>)>;

    fn push(&mut self, key: VertexId, record: Tagged);

    fn into_groups(self) -> Self::Groups;
}

/// Routes keys to reduce partitions by `key % partitions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashPartitioner {
    partitions: usize,
}

impl HashPartitioner {
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions: partitions.max(1),
        }
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn partition(&self, key: VertexId) -> usize {
        (key % self.partitions as u64) as usize
    }
}

type Partition = HashMap<VertexId, Vec<Tagged>>;

/// Hash-partitioned in-memory shuffle
///
/// Each map task fills its own shuffle; the runner then merges them, which
/// is the barrier between the map and reduce phases.
#[derive(Debug, Clone)]
pub struct InMemoryShuffle {
    partitioner: HashPartitioner,
    partitions: Vec<Partition>,
    records: usize,
}

impl InMemoryShuffle {
    pub fn new(partitions: usize) -> Self {
        let partitioner = HashPartitioner::new(partitions);
        Self {
            partitions: vec![Partition::new(); partitioner.partitions()],
            partitioner,
            records: 0,
        }
    }

    pub fn partitioner(&self) -> HashPartitioner {
        self.partitioner
    }

    /// Total number of records pushed
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.partitions.iter().map(HashMap::len).sum()
    }

    /// Records grouped under `key`, if any were pushed
    pub fn get(&self, key: VertexId) -> Option<&[Tagged]> {
        self.partitions[self.partitioner.partition(key)]
            .get(&key)
            .map(Vec::as_slice)
    }

    /// Absorb another shuffle's records
    pub fn merge(&mut self, other: InMemoryShuffle) {
        if other.partitioner == self.partitioner {
            self.records += other.records;
            for (target, source) in self.partitions.iter_mut().zip(other.partitions) {
                for (key, mut records) in source {
                    target.entry(key).or_default().append(&mut records);
                }
            }
        } else {
            for (key, records) in other.into_groups() {
                for record in records {
                    self.push(key, record);
                }
            }
        }
    }

    /// Split into one key-to-records map per reduce partition
    pub fn into_partitions(self) -> Vec<HashMap<VertexId, Vec<Tagged>>> {
        self.partitions
    }
}

impl Grouping for InMemoryShuffle {
    type Groups = std::iter::Flatten<std::vec::IntoIter<Partition>>;

    fn push(&mut self, key: VertexId, record: Tagged) {
        let partition = self.partitioner.partition(key);
        self.partitions[partition]
            .entry(key)
            .or_default()
            .push(record);
        self.records += 1;
    }

    fn into_groups(self) -> Self::Groups {
        self.partitions.into_iter().flatten()
    }
}
