use itertools::Itertools;

use super::{
    high_level::{ColouringEncoding, EdgeEncoding, VertexEncoding},
    variables::ColouringVariables,
    Clause, Formula,
};

pub trait SATEncoding {
    fn encode_sat(&self, variables: &ColouringVariables) -> Formula;
}

impl VertexEncoding {
    /// \/ x(v,c) for all colours c
    pub fn at_least_one(&self, variables: &ColouringVariables) -> Clause {
        variables.vertex_variables(self.0).collect()
    }

    /// Pairwise encoding, one clause per pair of colours r < q:
    /// ~x(v,q) || ~x(v,r)
    pub fn at_most_one(&self, variables: &ColouringVariables) -> Formula {
        (0..variables.colours())
            .tuple_combinations()
            .map(|(lower, higher)| {
                vec![
                    -variables.variable(self.0, higher),
                    -variables.variable(self.0, lower),
                ]
            })
            .collect()
    }
}

impl SATEncoding for VertexEncoding {
    fn encode_sat(&self, variables: &ColouringVariables) -> Formula {
        let mut formula = vec![self.at_least_one(variables)];
        formula.append(&mut self.at_most_one(variables));
        formula
    }
}

impl SATEncoding for EdgeEncoding {
    fn encode_sat(&self, variables: &ColouringVariables) -> Formula {
        // ~x(u,c) || ~x(v,c) for all colours c
        let (start, end) = self.get_edge();
        (0..variables.colours())
            .map(|colour| {
                vec![
                    -variables.variable(start, colour),
                    -variables.variable(end, colour),
                ]
            })
            .collect()
    }
}

impl SATEncoding for ColouringEncoding {
    fn encode_sat(&self, variables: &ColouringVariables) -> Formula {
        // Grouped by constraint kind: all at-least-one clauses,
        // then all at-most-one clauses, then the edge constraints.
        let ColouringEncoding(vertices, edges) = self;

        let at_least_one = vertices
            .iter()
            .map(|vertex| vertex.at_least_one(variables));
        let at_most_one = vertices
            .iter()
            .flat_map(|vertex| vertex.at_most_one(variables));
        let edge_constraints = edges.iter().flat_map(|edge| edge.encode_sat(variables));

        at_least_one
            .chain(at_most_one)
            .chain(edge_constraints)
            .collect()
    }
}
