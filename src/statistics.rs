//! Statistics about different parts of the program.

use custom_debug_derive::Debug;
use std::{
    fs::File,
    io::Write,
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::debug::opt_fmt;
use crate::{encoding::CnfFormula, graph::Graph, sat_solving::Verdict, Error};

/// Number of clauses per constraint kind.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ClauseStatistics {
    pub at_least_one: usize,
    pub at_most_one: usize,
    pub edge_constraints: usize,
}

impl ClauseStatistics {
    /// Split the clauses of a colouring formula into their kinds.
    /// The edge constraints are whatever remains after the vertex clauses.
    pub fn from_formula(vertex_count: usize, colours: usize, formula: &CnfFormula) -> Self {
        let at_least_one = vertex_count;
        let at_most_one = vertex_count * (colours * colours.saturating_sub(1) / 2);
        let edge_constraints = formula
            .clause_count()
            .saturating_sub(at_least_one + at_most_one);

        ClauseStatistics {
            at_least_one,
            at_most_one,
            edge_constraints,
        }
    }

    pub fn total(&self) -> usize {
        self.at_least_one + self.at_most_one + self.edge_constraints
    }
}

#[derive(Debug)]
pub struct Statistics {
    // Meta information
    #[debug(skip)]
    out_file: PathBuf,
    // Timings
    #[debug(skip)]
    start_time: Instant,
    #[debug(with = "opt_fmt")]
    read_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    encoding_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    writing_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    kissat_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    end_time: Option<Duration>,
    // Graph statistics
    vertex_count: usize,
    declared_edges: usize,
    edge_count: usize,
    // Formula statistics
    colours: usize,
    variable_count: usize,
    clauses: ClauseStatistics,
    #[debug(with = "opt_fmt")]
    verdict: Option<Verdict>,
}

impl Statistics {
    pub fn new(out_file: PathBuf) -> Self {
        Statistics {
            out_file,
            start_time: Instant::now(),
            read_time: None,
            encoding_time: None,
            writing_time: None,
            kissat_time: None,
            end_time: None,
            vertex_count: 0,
            declared_edges: 0,
            edge_count: 0,
            colours: 0,
            variable_count: 0,
            clauses: ClauseStatistics::default(),
            verdict: None,
        }
    }

    pub fn log_graph(&mut self, graph: &Graph, duration: Duration) {
        self.vertex_count = graph.size();
        self.declared_edges = graph.declared_edges();
        self.edge_count = graph.number_edges();
        self.read_time = Some(duration);
    }

    pub fn log_formula(&mut self, formula: &CnfFormula, colours: usize, duration: Duration) {
        self.colours = colours;
        self.variable_count = formula.variable_count();
        self.clauses = ClauseStatistics::from_formula(self.vertex_count, colours, formula);
        self.encoding_time = Some(duration);
    }

    pub fn log_written(&mut self, duration: Duration) {
        self.writing_time = Some(duration);
    }

    pub fn log_verdict(&mut self, verdict: Verdict, duration: Duration) {
        self.verdict = Some(verdict);
        self.kissat_time = Some(duration);
    }

    pub fn log_end(&mut self) {
        self.end_time = Some(self.start_time.elapsed());
    }

    pub fn clauses(&self) -> ClauseStatistics {
        self.clauses
    }

    #[cfg(not(tarpaulin_include))]
    pub fn save_statistics(&self) -> Result<(), Error> {
        let mut statistics_file = File::create(&self.out_file)?;
        write!(statistics_file, "Raw Statistics: {:#?}", self).map_err(Error::from)
    }
}
