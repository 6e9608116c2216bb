//! JSON-lines vertex reader and writer
//!
//! One vertex object per line. Blank lines are skipped on input.

use crate::error::{EdgeCopyError, ErrorCode, Result};
use crate::graph::Vertex;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub fn read_vertices<R: BufRead>(reader: R) -> Result<Vec<Vertex>> {
    let mut vertices = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| {
            EdgeCopyError::io(
                ErrorCode::IO_READ_FAILED,
                format!("failed to read line {line_no}"),
                e,
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let vertex = serde_json::from_str(&line).map_err(|e| {
            EdgeCopyError::serialization(
                ErrorCode::IO_DESERIALIZATION_ERROR,
                "invalid vertex record",
                Some(line_no),
                e,
            )
        })?;
        vertices.push(vertex);
    }
    Ok(vertices)
}

pub fn write_vertices<W: Write>(mut writer: W, vertices: &[Vertex]) -> Result<()> {
    for vertex in vertices {
        serde_json::to_writer(&mut writer, vertex).map_err(|e| {
            EdgeCopyError::serialization(
                ErrorCode::IO_SERIALIZATION_ERROR,
                format!("failed to write vertex {}", vertex.id),
                None,
                e,
            )
        })?;
        writer
            .write_all(b"\n")
            .map_err(|e| EdgeCopyError::io(ErrorCode::IO_WRITE_FAILED, "failed to write record", e))?;
    }
    writer
        .flush()
        .map_err(|e| EdgeCopyError::io(ErrorCode::IO_WRITE_FAILED, "failed to flush output", e))
}

pub fn read_vertices_from_path(path: &Path) -> Result<Vec<Vertex>> {
    let file = File::open(path).map_err(|e| {
        EdgeCopyError::io(
            ErrorCode::IO_READ_FAILED,
            format!("cannot open {}", path.display()),
            e,
        )
    })?;
    let vertices = read_vertices(BufReader::new(file)).map_err(|e| e.with_context(path.display()))?;
    debug!(path = %path.display(), count = vertices.len(), "read vertices");
    Ok(vertices)
}

pub fn write_vertices_to_path(path: &Path, vertices: &[Vertex]) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        EdgeCopyError::io(
            ErrorCode::IO_WRITE_FAILED,
            format!("cannot create {}", path.display()),
            e,
        )
    })?;
    write_vertices(BufWriter::new(file), vertices).map_err(|e| e.with_context(path.display()))?;
    debug!(path = %path.display(), count = vertices.len(), "wrote vertices");
    Ok(())
}
