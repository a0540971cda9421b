//! Reader for formulas in DIMACS CNF syntax.
//! Tokenizing is left to flussab; the header is
//! checked against the clauses read here.

use flussab_cnf::cnf::{Config, Parser};
use std::{fs::File, io::Read, path::Path};

use kissat_rs::Literal;

use crate::{debug::CnfError, encoding::CnfFormula, Error};

fn syntax_error(error: impl ToString) -> Error {
    CnfError::Syntax(error.to_string()).into()
}

/// Read a CNF formula and check it against its header.
pub fn parse_cnf(input: impl Read) -> Result<CnfFormula, Error> {
    let mut parser =
        Parser::<Literal>::from_read(input, Config::default().ignore_header(true))
            .map_err(syntax_error)?;
    let header = parser.header().ok_or(CnfError::MissingHeader)?;
    let variables = header.var_count;

    let mut clauses = Vec::new();
    while let Some(clause) = parser.next_clause().map_err(syntax_error)? {
        if let Some(&literal) = clause
            .iter()
            .find(|literal| literal.unsigned_abs() as usize > variables)
        {
            return Err(CnfError::LiteralOutOfRange { literal, variables }.into());
        }
        clauses.push(clause.to_vec());
    }

    if header.clause_count != clauses.len() {
        return Err(CnfError::ClauseCount {
            declared: header.clause_count,
            found: clauses.len(),
        }
        .into());
    }

    Ok(CnfFormula::new(variables, clauses))
}

pub fn parse_cnf_file(path: &Path) -> Result<CnfFormula, Error> {
    let file = File::open(path)?;
    parse_cnf(file)
}
