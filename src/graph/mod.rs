//! Vertex and edge records the transform operates on
//!
//! Vertices own their edges by value. An edge is stored on a vertex under
//! the direction it has from that vertex's point of view, and names the
//! opposite endpoint by id.

pub mod direction;
pub mod edge;
pub mod property;
pub mod vertex;

pub use direction::Direction;
pub use edge::Edge;
pub use property::{Properties, PropertyValue};
pub use vertex::Vertex;

/// Stable vertex identifier, used both as shuffle key and output identity
pub type VertexId = u64;
