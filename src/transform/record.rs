//! Tagged records exchanged between the map and reduce sides

use crate::graph::{Direction, Vertex, VertexId};
use serde::{Deserialize, Serialize};

/// Intermediate record passed from emitter to merger through the shuffle
///
/// A `Shell` carries only edges copied onto the keyed vertex by some other
/// vertex; a `Real` carries a vertex's own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Tagged {
    Shell(Vertex),
    Real(Vertex),
}

impl Tagged {
    pub fn vertex(&self) -> &Vertex {
        match self {
            Self::Shell(v) | Self::Real(v) => v,
        }
    }

    pub fn into_vertex(self) -> Vertex {
        match self {
            Self::Shell(v) | Self::Real(v) => v,
        }
    }

    pub fn id(&self) -> VertexId {
        self.vertex().id
    }

    pub fn is_shell(&self) -> bool {
        matches!(self, Self::Shell(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// Number of copied edges a shell carries in `direction`; zero for real records
    pub fn shell_edge_count(&self, direction: Direction) -> usize {
        match self {
            Self::Shell(v) => v.edge_count(direction),
            Self::Real(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn test_json_tagging() {
        let shell = Tagged::Shell(Vertex::new(2).with_edge(Direction::In, Edge::new("e", 1)));
        let json = serde_json::to_value(&shell).unwrap();
        assert_eq!(json["kind"], "shell");
        assert_eq!(json["id"], 2);

        let back: Tagged = serde_json::from_value(json).unwrap();
        assert_eq!(back, shell);
    }

    #[test]
    fn test_shell_edge_count() {
        let vertex = Vertex::new(2).with_edge(Direction::In, Edge::new("e", 1));
        assert_eq!(Tagged::Shell(vertex.clone()).shell_edge_count(Direction::In), 1);
        assert_eq!(Tagged::Shell(vertex.clone()).shell_edge_count(Direction::Out), 0);
        assert_eq!(Tagged::Real(vertex).shell_edge_count(Direction::In), 0);
    }
}
