//! Record source and sink for vertex streams

pub mod jsonl;

pub use jsonl::{read_vertices, read_vertices_from_path, write_vertices, write_vertices_to_path};
