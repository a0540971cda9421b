use crate::graph::{Graph, VertexIndex};

/// Trait that defines whether a type can be encoded
/// into a high level view of a SAT formula.
pub trait HighLevelEncoding {
    type HighLevelRepresentation;
    fn encode_high(&self) -> Self::HighLevelRepresentation;
}

/// A vertex that has to get exactly one colour.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VertexEncoding(pub VertexIndex);

/// Two vertices that must not share a colour.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EdgeEncoding(pub VertexIndex, pub VertexIndex);

impl EdgeEncoding {
    pub fn get_edge(&self) -> (VertexIndex, VertexIndex) {
        (self.0, self.1)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ColouringEncoding(pub Vec<VertexEncoding>, pub Vec<EdgeEncoding>);

impl HighLevelEncoding for Graph {
    type HighLevelRepresentation = ColouringEncoding;

    fn encode_high(&self) -> Self::HighLevelRepresentation {
        let vertices = (0..self.size()).map(VertexEncoding).collect();
        let edges = self
            .iterate_edges()
            .map(|(start, end)| EdgeEncoding(start, end))
            .collect();

        ColouringEncoding(vertices, edges)
    }
}
