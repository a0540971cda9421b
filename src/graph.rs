//! Graphs as read from DIMACS `.col` files.
//! Only the declared sizes and the raw edge list
//! are kept, nothing is deduplicated or sorted.

use custom_debug_derive::Debug;

pub type VertexIndex = usize;
pub type Colour = usize;
pub type Edge = (VertexIndex, VertexIndex);

/// An edge endpoint that lies outside of the declared vertex range.
/// Stores the position of the edge in the edge list and the endpoint.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GraphError {
    pub edge_position: usize,
    pub vertex: VertexIndex,
    pub vertex_count: usize,
}

impl std::fmt::Display for GraphError {
    #[cfg(not(tarpaulin_include))]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Report 1-based indices as they appear in the input file.
        write!(
            f,
            "edge {} references vertex {} of a graph with {} vertices",
            self.edge_position + 1,
            self.vertex + 1,
            self.vertex_count
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    #[debug(with = "edge_list_fmt")]
    edges: Vec<Edge>,
}

#[allow(clippy::ptr_arg)]
fn edge_list_fmt(edges: &Vec<Edge>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{} edges]", edges.len())
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            vertex_count,
            edge_count: 0,
            edges: Vec::new(),
        }
    }

    pub fn with_edges(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Graph {
            vertex_count,
            edge_count: edges.len(),
            edges,
        }
    }

    /// Number of vertices as declared by the header.
    pub fn size(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges as declared by the header.
    /// This may differ from the number of edges actually read.
    pub fn declared_edges(&self) -> usize {
        self.edge_count
    }

    pub fn set_header(&mut self, vertex_count: usize, edge_count: usize) {
        self.vertex_count = vertex_count;
        self.edge_count = edge_count;
    }

    /// Appends an edge without any checks.
    /// Use `validate` before relying on the endpoints.
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) {
        self.edges.push((start, end));
    }

    #[cfg(test)]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn number_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn iterate_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Checks that every edge endpoint is a vertex of this graph.
    /// Self loops and parallel edges are allowed.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (edge_position, (start, end)) in self.iterate_edges().enumerate() {
            for vertex in [start, end].iter() {
                if *vertex >= self.vertex_count {
                    return Err(GraphError {
                        edge_position,
                        vertex: *vertex,
                        vertex_count: self.vertex_count,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn self_loops(&self) -> usize {
        self.iterate_edges()
            .filter(|(start, end)| start == end)
            .count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(2, 2);
        graph.add_edge(1, 0);
        assert_eq!(Ok(()), graph.validate());

        graph.add_edge(1, 3);
        assert_eq!(
            Err(GraphError {
                edge_position: 3,
                vertex: 3,
                vertex_count: 3
            }),
            graph.validate()
        );
    }

    #[test]
    fn test_empty_graph_with_edges_is_invalid() {
        let graph = Graph::with_edges(0, vec![(0, 0)]);
        assert!(graph.validate().is_err());
        assert!(Graph::new(0).validate().is_ok());
    }

    #[test]
    fn test_header_and_edges_are_independent() {
        let mut graph = Graph::new(0);
        graph.set_header(4, 10);
        graph.add_edge(0, 1);
        graph.add_edge(0, 1);
        graph.add_edge(3, 3);

        assert_eq!(4, graph.size());
        assert_eq!(10, graph.declared_edges());
        assert_eq!(3, graph.number_edges());
        assert_eq!(1, graph.self_loops());
        assert_eq!(vec![(0, 1), (0, 1), (3, 3)], graph.edges().to_vec());
    }
}
