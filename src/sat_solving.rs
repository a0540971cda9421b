//! Bridge to the SAT solver that decides the encoded formulas.
//! The encoding side only relies on the `SolverAdapter` calls
//! and on the solver reading DIMACS CNF files.

use itertools::Itertools;
use kissat_rs::{Literal, Solver};
use std::{collections::HashMap, path::Path, str::FromStr};

use crate::{
    debug::{SolverError, StrategyError},
    encoding::{CnfFormula, Formula},
    parser::parse_cnf_file,
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchingStrategy {
    /// Leave the variable order as it is in the file.
    Default,
    /// Present the most frequently occurring variables first.
    FrequentVariablesFirst,
}

impl FromStr for BranchingStrategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            Ok(Self::Default)
        } else if s == "frequent-vars-first" {
            Ok(Self::FrequentVariablesFirst)
        } else {
            Err(StrategyError(s.to_string()))
        }
    }
}

impl Default for BranchingStrategy {
    fn default() -> Self {
        Self::Default
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Unsatisfiable = 0,
    Satisfiable = 1,
}

impl Verdict {
    pub fn as_bit(self) -> u8 {
        self as u8
    }

    pub fn is_satisfiable(self) -> bool {
        self == Self::Satisfiable
    }
}

impl From<bool> for Verdict {
    fn from(satisfiable: bool) -> Self {
        if satisfiable {
            Self::Satisfiable
        } else {
            Self::Unsatisfiable
        }
    }
}

/// The three calls the pipeline makes into a solver.
pub trait SolverAdapter {
    type Handle;

    fn open(&self, cnf_path: &Path) -> Result<Self::Handle, Error>;
    fn run(&self, handle: &mut Self::Handle) -> Result<(), Error>;
    fn compute_verdict(&self, handle: &Self::Handle) -> Result<Verdict, Error>;
}

#[derive(Debug)]
pub struct SolverHandle {
    formula: CnfFormula,
    verdict: Option<Verdict>,
}

/// Renumber variables such that the most frequent ones get the
/// smallest indices. Ties keep their original order.
fn frequent_variables_first(formula: &CnfFormula) -> Formula {
    let counts = formula
        .clauses()
        .iter()
        .flatten()
        .map(|literal| literal.abs())
        .counts();

    let renaming: HashMap<Literal, Literal> = counts
        .into_iter()
        .sorted_by(|(var_a, count_a), (var_b, count_b)| {
            count_b.cmp(count_a).then(var_a.cmp(var_b))
        })
        .enumerate()
        .map(|(position, (variable, _))| (variable, position as Literal + 1))
        .collect();

    formula
        .clauses()
        .iter()
        .map(|clause| {
            clause
                .iter()
                .map(|literal| literal.signum() * renaming[&literal.abs()])
                .collect()
        })
        .collect()
}

/// Kissat with a configurable presentation order of the variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct KissatSolver {
    pub strategy: BranchingStrategy,
}

impl KissatSolver {
    pub fn new(strategy: BranchingStrategy) -> Self {
        KissatSolver { strategy }
    }

    fn solve(&self, formula: &CnfFormula) -> Result<Verdict, Error> {
        if formula.clause_count() == 0 {
            log::debug!("Formula without clauses, trivially satisfiable");
            return Ok(Verdict::Satisfiable);
        }

        let clauses = match self.strategy {
            BranchingStrategy::Default => formula.clauses().to_vec(),
            BranchingStrategy::FrequentVariablesFirst => frequent_variables_first(formula),
        };

        let assignment = Solver::solve_formula(clauses)?;
        Ok(Verdict::from(assignment.is_some()))
    }
}

impl SolverAdapter for KissatSolver {
    type Handle = SolverHandle;

    fn open(&self, cnf_path: &Path) -> Result<Self::Handle, Error> {
        let formula = parse_cnf_file(cnf_path)?;
        log::debug!(
            "Opened {} with {} variables and {} clauses",
            cnf_path.display(),
            formula.variable_count(),
            formula.clause_count()
        );

        Ok(SolverHandle {
            formula,
            verdict: None,
        })
    }

    fn run(&self, handle: &mut Self::Handle) -> Result<(), Error> {
        handle.verdict = Some(self.solve(&handle.formula)?);
        Ok(())
    }

    fn compute_verdict(&self, handle: &Self::Handle) -> Result<Verdict, Error> {
        handle.verdict.ok_or_else(|| SolverError::NotRun.into())
    }
}

/// Open, run and ask for the verdict in one go.
pub fn solve_cnf_file<S: SolverAdapter>(solver: &S, cnf_path: &Path) -> Result<Verdict, Error> {
    let mut handle = solver.open(cnf_path)?;
    solver.run(&mut handle)?;
    solver.compute_verdict(&handle)
}
