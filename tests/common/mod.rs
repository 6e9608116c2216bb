//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use edgecopy::graph::{Direction, Edge, Vertex, VertexId};
use edgecopy::io::{read_vertices_from_path, write_vertices_to_path};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary working directory holding job input and output files
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `vertices` as JSON lines and return the file path
    pub fn write_input(&self, name: &str, vertices: &[Vertex]) -> Result<PathBuf> {
        let path = self.file(name);
        write_vertices_to_path(&path, vertices)?;
        Ok(path)
    }

    pub fn write_text(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.file(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read_output(&self, name: &str) -> Result<Vec<Vertex>> {
        Ok(read_vertices_from_path(&self.file(name))?)
    }
}

/// A(1) -knows{weight=5}-> B(2), with B present in the input
pub fn knows_pair() -> Vec<Vertex> {
    vec![
        Vertex::new(1)
            .with_property("name", "a")
            .with_edge(Direction::Out, Edge::new("knows", 2).with_property("weight", 5)),
        Vertex::new(2).with_property("name", "b"),
    ]
}

/// Star with `leaves` out-edges from vertex 0 to 1..=leaves
pub fn star(leaves: VertexId) -> Vec<Vertex> {
    let hub = (1..=leaves).fold(Vertex::new(0), |v, leaf| {
        v.with_edge(Direction::Out, Edge::new("links", leaf).with_property("rank", leaf as i64))
    });
    std::iter::once(hub)
        .chain((1..=leaves).map(Vertex::new))
        .collect()
}

pub fn find(vertices: &[Vertex], id: VertexId) -> &Vertex {
    vertices
        .iter()
        .find(|v| v.id == id)
        .unwrap_or_else(|| panic!("vertex {id} missing from output"))
}
