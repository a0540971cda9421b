use std::path::PathBuf;

use crate::{sat_solving::BranchingStrategy, statistics::Statistics};

#[cfg(not(tarpaulin_include))]
pub fn do_if_some<F, T>(optional: &mut Option<T>, f: F)
where
    F: FnOnce(&mut T),
{
    if let Some(val) = optional {
        f(val);
    }
}

/// Output name used when none is given, e.g. `sat_input_k5.txt`.
pub fn default_output(colours: usize) -> PathBuf {
    PathBuf::from(format!("sat_input_k{}.txt", colours))
}

#[derive(Debug)]
pub struct Settings {
    /// Graph in DIMACS syntax.
    pub input: PathBuf,
    /// Number of colours to encode.
    pub colours: usize,
    /// Where the CNF formula is written.
    pub output: PathBuf,
    /// Hand the written formula to the solver.
    pub solve: bool,
    /// Variable order the solver is fed with.
    pub strategy: BranchingStrategy,
    /// Print the formula in logical notation.
    pub print_formula: bool,
    /// Collected only when a statistics file is requested.
    pub statistics: Option<Statistics>,
}

impl Settings {
    pub fn new(input: PathBuf, colours: usize) -> Self {
        Settings {
            input,
            colours,
            output: default_output(colours),
            solve: false,
            strategy: BranchingStrategy::default(),
            print_formula: false,
            statistics: None,
        }
    }

    pub fn get_stats(&mut self) -> &mut Option<Statistics> {
        &mut self.statistics
    }
}
