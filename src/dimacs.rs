//! Output of formulas in DIMACS CNF syntax.

use flussab::DeferredWriter;
use flussab_cnf::cnf::{write_clause, write_header, Header};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{encoding::CnfFormula, Error};

/// Header first, then one line per clause terminated by `0`.
/// The clause count in the header is taken from the formula itself.
pub fn write_formula_dimacs(writer: &mut impl Write, formula: &CnfFormula) -> Result<(), Error> {
    let header = Header {
        var_count: formula.variable_count(),
        clause_count: formula.clause_count(),
    };
    let mut deferred = DeferredWriter::from_write(&mut *writer);
    write_header(&mut deferred, header);

    for clause in formula.clauses() {
        write_clause(&mut deferred, clause);
    }

    deferred.flush()?;
    drop(deferred);
    writer.flush().map_err(Error::from)
}

/// Creates or truncates the file at `path`.
pub fn write_dimacs_cnf(formula: &CnfFormula, path: &Path) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_formula_dimacs(&mut writer, formula)
}

#[cfg(test)]
mod test {
    use std::fs;

    use crate::{encoding::encode_k_coloring, graph::Graph, parser::parse_cnf_file};

    use super::*;

    #[test]
    fn test_write_formula_dimacs() -> Result<(), Error> {
        let formula = CnfFormula::new(4, vec![vec![1, 2], vec![-2, -1], vec![-1, -3]]);
        let mut buffer = Vec::new();
        write_formula_dimacs(&mut buffer, &formula)?;

        let expected = "p cnf 4 3\n1 2 0\n-2 -1 0\n-1 -3 0\n";
        assert_eq!(expected, String::from_utf8_lossy(&buffer));

        Ok(())
    }

    #[test]
    fn test_write_empty_formula() -> Result<(), Error> {
        let mut buffer = Vec::new();
        write_formula_dimacs(&mut buffer, &CnfFormula::new(0, Vec::new()))?;
        assert_eq!("p cnf 0 0\n", String::from_utf8_lossy(&buffer));

        Ok(())
    }

    #[test]
    fn test_write_then_reparse() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("triangle.cnf");

        let graph = Graph::with_edges(3, vec![(0, 1), (1, 2), (0, 2)]);
        let formula = encode_k_coloring(&graph, 3)?;
        write_dimacs_cnf(&formula, &path)?;

        let content = fs::read_to_string(&path)?;
        let mut lines = content.lines();
        assert_eq!(Some("p cnf 9 21"), lines.next());
        assert_eq!(formula.clause_count(), lines.count());

        assert_eq!(formula, parse_cnf_file(&path)?);

        Ok(())
    }

    #[test]
    fn test_write_overwrites() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.cnf");
        fs::write(&path, "garbage that is much longer than the formula\n".repeat(10))?;

        let formula = CnfFormula::new(1, vec![vec![1]]);
        write_dimacs_cnf(&formula, &path)?;
        assert_eq!("p cnf 1 1\n1 0\n", fs::read_to_string(&path)?);

        Ok(())
    }

    #[test]
    fn test_write_to_missing_directory() {
        let formula = CnfFormula::new(1, vec![vec![1]]);
        let written = write_dimacs_cnf(&formula, Path::new("/no/such/directory/out.cnf"));
        assert!(matches!(written, Err(Error::Io(_))));
    }
}
