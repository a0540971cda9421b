//! Debug facilities.
use kissat_rs::Literal;
use nom::error::{VerboseError, VerboseErrorKind};
use std::{
    fmt::{self, Debug, Display},
    io,
};

use crate::{
    encoding::{Clause, EncodingError},
    graph::GraphError,
    parser::ParseError,
};

// Error types and From<...> implementations

#[derive(Debug)]
pub struct StrategyError(pub String);

impl Display for StrategyError {
    #[cfg(not(tarpaulin_include))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Inconsistencies between a CNF header and the clauses below it.
#[derive(Debug, PartialEq, Eq)]
pub enum CnfError {
    MissingHeader,
    ClauseCount { declared: usize, found: usize },
    LiteralOutOfRange { literal: Literal, variables: usize },
    /// Rejected by the DIMACS tokenizer, with its message.
    Syntax(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SolverError {
    NotRun,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Error while parsing line {line} `{content}`: {kinds:?}")]
    ParseError {
        line: usize,
        content: String,
        kinds: Vec<VerboseErrorKind>,
    },
    #[error("Invalid graph: {0}")]
    GraphError(GraphError),
    #[error("Graph can't be encoded: {0:?}")]
    EncodingError(EncodingError),
    #[error("Malformed CNF input: {0:?}")]
    CnfError(CnfError),
    #[error("Solver misuse: {0:?}")]
    SolverError(SolverError),
    #[error("Error while calling Kissat")]
    KissatError(kissat_rs::Error),
    #[error("Unknown branching strategy `{0}`")]
    StrategyError(StrategyError),
}

impl Error {
    /// Attach the line that could not be parsed to the nom error.
    /// Lines are counted from 1.
    pub fn at_line(line: usize, content: &str, pe: nom::Err<ParseError<'_>>) -> Self {
        let kinds = match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => {
                handle_nom_verbose_error(verbose)
            }
            nom::Err::Incomplete(_) => Vec::new(),
        };

        Self::ParseError {
            line,
            content: content.to_string(),
            kinds,
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn handle_nom_verbose_error<E: Debug>(verbose: VerboseError<E>) -> Vec<VerboseErrorKind> {
    verbose
        .errors
        .into_iter()
        .map(|(rest, kind)| {
            log::trace!("nom stopped at {:?} with {:?}", rest, kind);
            kind
        })
        .collect()
}

/// Without a line number at hand the position
/// is only known through the unparsed rest.
impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(pe: nom::Err<ParseError<'a>>) -> Self {
        let content = match &pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => verbose
                .errors
                .last()
                .map(|(rest, _)| rest.to_string())
                .unwrap_or_default(),
            nom::Err::Incomplete(_) => String::new(),
        };
        Self::at_line(0, &content, pe)
    }
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

impl From<EncodingError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ee: EncodingError) -> Self {
        Self::EncodingError(ee)
    }
}

impl From<CnfError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ce: CnfError) -> Self {
        Self::CnfError(ce)
    }
}

impl From<SolverError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(se: SolverError) -> Self {
        Self::SolverError(se)
    }
}

impl From<kissat_rs::Error> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ke: kissat_rs::Error) -> Self {
        Self::KissatError(ke)
    }
}

impl From<StrategyError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(se: StrategyError) -> Self {
        Self::StrategyError(se)
    }
}

// Formula printing

fn format_clause<'a>(clause: impl Iterator<Item = &'a Literal>) -> String {
    let literals = itertools::Itertools::intersperse(
        clause.map(|literal| {
            if *literal < 0 {
                format!("¬{}", -literal)
            } else {
                format!("{}", literal)
            }
        }),
        " ∨ ".to_string(),
    )
    .collect::<String>();

    format!("({}) ∧", literals)
}

#[cfg(not(tarpaulin_include))]
pub fn print_formula<'a>(formula: impl Iterator<Item = &'a Clause>) {
    formula.for_each(|clause| println!("{}", format_clause(clause.iter())));
    println!("True");
}

// Custom formatter for debug printing

#[cfg(not(tarpaulin_include))]
pub fn opt_fmt<T: fmt::Debug>(option: &Option<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match option {
        Some(val) => val.fmt(f),
        None => write!(f, "None"),
    }
}

// Debug macros that allow to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}
