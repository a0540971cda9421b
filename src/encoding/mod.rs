//! This file contains the high and low level encodings
//! needed to encode the k-colouring problem of a graph
//! as a CNF formula which can then be decided by a SAT solver.

use kissat_rs::Literal;

mod high_level;
pub use high_level::HighLevelEncoding;

mod low_level;
use low_level::SATEncoding;

mod variables;
pub use variables::{var_id, ColouringVariables, EncodingError, MAX_VARIABLE};

use crate::{graph::Graph, Error};

pub type Clause = Vec<Literal>;
pub type Formula = Vec<Clause>;

/// A formula in conjunctive normal form together with
/// the size of its variable space. The clause count is
/// always the number of clauses actually stored.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CnfFormula {
    variable_count: usize,
    clauses: Formula,
}

impl CnfFormula {
    pub fn new(variable_count: usize, clauses: Formula) -> Self {
        CnfFormula {
            variable_count,
            clauses,
        }
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    #[cfg(test)]
    pub fn into_clauses(self) -> Formula {
        self.clauses
    }
}

/// Encode the decision problem whether `graph` can
/// be coloured with `colours` colours into SAT.
/// Fails before generating any clause if the graph
/// references unknown vertices, no colour is given or
/// the formula would be too large.
pub fn encode_k_coloring(graph: &Graph, colours: usize) -> Result<CnfFormula, Error> {
    graph.validate()?;
    let variables = ColouringVariables::new(graph.size(), colours)?;
    let clause_count = variables.clause_count(graph.number_edges())?;

    let self_loops = graph.self_loops();
    if self_loops > 0 {
        log::warn!(
            "Graph has {} self loop(s), the formula will be unsatisfiable",
            self_loops
        );
    }

    let clauses = graph.encode_high().encode_sat(&variables);
    debug_assert_eq!(clause_count, clauses.len());

    Ok(CnfFormula::new(variables.variable_count(), clauses))
}
