use kissat_rs::Literal;

use crate::graph::{Colour, VertexIndex};

/// Kissat doesn't allow variables over 2^28-1.
pub const MAX_VARIABLE: usize = (1 << 28) - 1;
/// Largest formula that is built in memory.
pub const MAX_CLAUSES: usize = i32::MAX as usize;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EncodingError {
    /// A colouring needs at least one colour.
    NoColours,
    TooManyVariables { vertices: usize, colours: usize },
    TooManyClauses { vertices: usize, edges: usize, colours: usize },
}

/// Variable for "vertex has colour" in a graph coloured with `colours` colours.
/// Variables are numbered vertex by vertex, colour by colour, starting at 1.
pub fn var_id(vertex: VertexIndex, colour: Colour, colours: usize) -> Literal {
    (vertex * colours + colour + 1) as Literal
}

/// The variable space of a colouring problem.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ColouringVariables {
    vertex_count: usize,
    colours: usize,
}

impl ColouringVariables {
    pub fn new(vertex_count: usize, colours: usize) -> Result<Self, EncodingError> {
        if colours == 0 {
            return Err(EncodingError::NoColours);
        }

        match vertex_count.checked_mul(colours) {
            Some(variables) if variables <= MAX_VARIABLE => Ok(ColouringVariables {
                vertex_count,
                colours,
            }),
            _ => Err(EncodingError::TooManyVariables {
                vertices: vertex_count,
                colours,
            }),
        }
    }

    /// Checks that the colouring formula of a graph with `edge_count`
    /// edges stays below `MAX_CLAUSES` and returns its clause count:
    /// one clause per vertex, one per pair of colours and vertex,
    /// one per colour and edge.
    pub fn clause_count(&self, edge_count: usize) -> Result<usize, EncodingError> {
        let colour_pairs = self.colours.checked_mul(self.colours - 1).map(|pairs| pairs / 2);

        colour_pairs
            .and_then(|pairs| self.vertex_count.checked_mul(pairs))
            .and_then(|at_most_one| at_most_one.checked_add(self.vertex_count))
            .and_then(|vertex_clauses| {
                edge_count
                    .checked_mul(self.colours)
                    .and_then(|edge_clauses| edge_clauses.checked_add(vertex_clauses))
            })
            .filter(|clauses| *clauses <= MAX_CLAUSES)
            .ok_or(EncodingError::TooManyClauses {
                vertices: self.vertex_count,
                edges: edge_count,
                colours: self.colours,
            })
    }

    pub fn variable_count(&self) -> usize {
        self.vertex_count * self.colours
    }

    pub fn colours(&self) -> usize {
        self.colours
    }

    pub fn variable(&self, vertex: VertexIndex, colour: Colour) -> Literal {
        debug_assert!(vertex < self.vertex_count && colour < self.colours);
        var_id(vertex, colour, self.colours)
    }

    /// All variables of one vertex in colour order.
    pub fn vertex_variables(&self, vertex: VertexIndex) -> impl Iterator<Item = Literal> + '_ {
        (0..self.colours).map(move |colour| self.variable(vertex, colour))
    }

    /// Inverse of `variable`. Returns None for literals
    /// that don't belong to this variable space.
    pub fn decode(&self, variable: Literal) -> Option<(VertexIndex, Colour)> {
        if variable < 1 || variable as usize > self.variable_count() {
            return None;
        }

        let index = variable as usize - 1;
        Some((index / self.colours, index % self.colours))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_var_id() {
        assert_eq!(1, var_id(0, 0, 3));
        assert_eq!(3, var_id(0, 2, 3));
        assert_eq!(4, var_id(1, 0, 3));
        assert_eq!(12, var_id(3, 2, 3));
    }

    #[test]
    fn test_variables_are_bijective() -> Result<(), EncodingError> {
        let variables = ColouringVariables::new(7, 4)?;
        let mut expected = 1;

        for vertex in 0..7 {
            for colour in 0..4 {
                let variable = variables.variable(vertex, colour);
                assert_eq!(expected, variable);
                assert_eq!(Some((vertex, colour)), variables.decode(variable));
                expected += 1;
            }
        }

        assert_eq!(28, variables.variable_count());
        assert_eq!(None, variables.decode(0));
        assert_eq!(None, variables.decode(-3));
        assert_eq!(None, variables.decode(29));

        Ok(())
    }

    #[test]
    fn test_vertex_variables() -> Result<(), EncodingError> {
        let variables = ColouringVariables::new(3, 2)?;
        assert_eq!(vec![5, 6], variables.vertex_variables(2).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(
            Err(EncodingError::NoColours),
            ColouringVariables::new(5, 0)
        );
        assert_eq!(
            Err(EncodingError::TooManyVariables {
                vertices: MAX_VARIABLE,
                colours: 2
            }),
            ColouringVariables::new(MAX_VARIABLE, 2)
        );
        assert_eq!(
            Err(EncodingError::TooManyVariables {
                vertices: usize::MAX,
                colours: 3
            }),
            ColouringVariables::new(usize::MAX, 3)
        );
        assert!(ColouringVariables::new(0, 1).is_ok());
        assert!(ColouringVariables::new(MAX_VARIABLE, 1).is_ok());
    }

    #[test]
    fn test_clause_count() -> Result<(), EncodingError> {
        assert_eq!(5 + 5 * 3 + 7 * 3, ColouringVariables::new(5, 3)?.clause_count(7)?);
        assert_eq!(4, ColouringVariables::new(4, 1)?.clause_count(0)?);
        assert_eq!(0, ColouringVariables::new(0, 1000)?.clause_count(0)?);

        // Few enough variables, but the pairwise clauses explode.
        let wide = ColouringVariables::new(1, MAX_VARIABLE)?;
        assert_eq!(
            Err(EncodingError::TooManyClauses {
                vertices: 1,
                edges: 0,
                colours: MAX_VARIABLE
            }),
            wide.clause_count(0)
        );

        let dense = ColouringVariables::new(2, 2)?;
        assert!(dense.clause_count(MAX_CLAUSES).is_err());
        assert!(dense.clause_count(usize::MAX).is_err());

        Ok(())
    }
}
