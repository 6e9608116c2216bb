use super::direction::Direction;
use super::edge::Edge;
use super::property::{Properties, PropertyValue};
use super::VertexId;
use serde::{Deserialize, Serialize};

/// A vertex record with its properties and edges partitioned by direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub out_edges: Vec<Edge>,
    #[serde(default)]
    pub in_edges: Vec<Edge>,
}

impl Vertex {
    /// Create a vertex with no properties and no edges
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            properties: Properties::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn with_edge(mut self, direction: Direction, edge: Edge) -> Self {
        self.add_edge(direction, edge);
        self
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn edges(&self, direction: Direction) -> &[Edge] {
        match direction {
            Direction::Out => &self.out_edges,
            Direction::In => &self.in_edges,
        }
    }

    fn edges_mut(&mut self, direction: Direction) -> &mut Vec<Edge> {
        match direction {
            Direction::Out => &mut self.out_edges,
            Direction::In => &mut self.in_edges,
        }
    }

    /// All edges tagged with the direction they are stored under
    pub fn all_edges(&self) -> impl Iterator<Item = (Direction, &Edge)> {
        self.out_edges
            .iter()
            .map(|e| (Direction::Out, e))
            .chain(self.in_edges.iter().map(|e| (Direction::In, e)))
    }

    pub fn edge_count(&self, direction: Direction) -> usize {
        self.edges(direction).len()
    }

    pub fn add_edge(&mut self, direction: Direction, edge: Edge) {
        self.edges_mut(direction).push(edge);
    }

    /// Append copies of `other`'s edges in `direction`
    ///
    /// Existing edges are kept; nothing is deduplicated.
    pub fn add_edges(&mut self, direction: Direction, other: &Vertex) {
        self.edges_mut(direction)
            .extend(other.edges(direction).iter().cloned());
    }

    /// Merge `other`'s properties and all of its edges into this vertex
    ///
    /// Properties are inserted key by key, so a key present on both sides
    /// takes `other`'s value.
    pub fn add_all(&mut self, other: Vertex) {
        self.properties.extend(other.properties);
        self.out_edges.extend(other.out_edges);
        self.in_edges.extend(other.in_edges);
    }

    /// Sort both edge partitions into their canonical order
    pub fn canonicalize(&mut self) {
        self.out_edges.sort();
        self.in_edges.sort();
    }

    /// Turn this vertex into an empty vertex with a new id, keeping allocations
    pub fn reset(&mut self, id: VertexId) {
        self.id = id;
        self.properties.clear();
        self.out_edges.clear();
        self.in_edges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vertex {
        Vertex::new(1)
            .with_property("name", "a")
            .with_edge(Direction::Out, Edge::new("knows", 2).with_property("weight", 5))
            .with_edge(Direction::In, Edge::new("likes", 3))
    }

    #[test]
    fn test_edges_partitioned_by_direction() {
        let v = sample();
        assert_eq!(v.edge_count(Direction::Out), 1);
        assert_eq!(v.edge_count(Direction::In), 1);
        assert_eq!(v.edges(Direction::Out)[0].vertex_id, 2);
        assert_eq!(v.edges(Direction::In)[0].vertex_id, 3);

        let dirs: Vec<_> = v.all_edges().map(|(d, e)| (d, e.vertex_id)).collect();
        assert_eq!(dirs, vec![(Direction::Out, 2), (Direction::In, 3)]);
    }

    #[test]
    fn test_add_edges_appends_without_dedup() {
        let mut target = Vertex::new(2).with_edge(Direction::In, Edge::new("knows", 1));
        let shell = Vertex::new(2).with_edge(Direction::In, Edge::new("knows", 1));
        target.add_edges(Direction::In, &shell);
        assert_eq!(target.edge_count(Direction::In), 2);
        // other direction untouched
        target.add_edges(Direction::Out, &shell);
        assert_eq!(target.edge_count(Direction::Out), 0);
    }

    #[test]
    fn test_add_all_merges_properties_and_edges() {
        let mut target = Vertex::new(1)
            .with_property("name", "old")
            .with_edge(Direction::In, Edge::new("likes", 9));
        target.add_all(sample());

        assert_eq!(target.property("name"), Some(&PropertyValue::from("a")));
        assert_eq!(target.edge_count(Direction::Out), 1);
        assert_eq!(target.edge_count(Direction::In), 2);
    }

    #[test]
    fn test_canonicalize_sorts_edges() {
        let mut v = Vertex::new(1)
            .with_edge(Direction::In, Edge::new("b", 5))
            .with_edge(Direction::In, Edge::new("a", 5))
            .with_edge(Direction::In, Edge::new("z", 2));
        v.canonicalize();
        let order: Vec<_> = v
            .edges(Direction::In)
            .iter()
            .map(|e| (e.vertex_id, e.label.as_str()))
            .collect();
        assert_eq!(order, vec![(2, "z"), (5, "a"), (5, "b")]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut v = sample();
        v.reset(42);
        assert_eq!(v, Vertex::new(42));
    }

    #[test]
    fn test_json_defaults() {
        let v: Vertex = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(v, Vertex::new(7));
    }
}
