//! Graph file -> formula -> CNF file -> verdict.

use std::path::Path;

use crate::{
    debug::print_formula,
    dimacs::write_dimacs_cnf,
    do_if_some,
    encoding::{encode_k_coloring, CnfFormula},
    graph::Graph,
    misc::Settings,
    parser::parse_graph_file,
    sat_solving::{solve_cnf_file, KissatSolver, Verdict},
    statistics::Statistics,
    time, Error,
};

/// Read a graph, encode it with `colours` colours and write the CNF file.
/// Nothing is written if reading or encoding fails.
pub fn encode_graph_file(
    input: &Path,
    colours: usize,
    output: &Path,
    statistics: &mut Option<Statistics>,
) -> Result<CnfFormula, Error> {
    time!(read_time, graph, parse_graph_file(input));
    let graph: Graph = graph?;
    log::info!(
        "Read graph with {} vertices and {} edges from {}",
        graph.size(),
        graph.number_edges(),
        input.display()
    );
    log::debug!("Reading took {:?}", read_time);
    do_if_some(statistics, |stats| stats.log_graph(&graph, read_time));

    time!(encoding_time, formula, encode_k_coloring(&graph, colours));
    let formula = formula?;
    log::info!(
        "Encoded {}-colouring with {} variables and {} clauses",
        colours,
        formula.variable_count(),
        formula.clause_count()
    );
    log::debug!("Encoding took {:?}", encoding_time);
    do_if_some(statistics, |stats| {
        stats.log_formula(&formula, colours, encoding_time)
    });

    time!(writing_time, written, write_dimacs_cnf(&formula, output));
    written?;
    log::info!("Wrote formula to {}", output.display());
    do_if_some(statistics, |stats| stats.log_written(writing_time));

    Ok(formula)
}

/// Run everything the settings ask for. Returns the
/// verdict if the formula was handed to the solver.
pub fn run(settings: &mut Settings) -> Result<Option<Verdict>, Error> {
    let formula = encode_graph_file(
        &settings.input,
        settings.colours,
        &settings.output,
        &mut settings.statistics,
    )?;

    if settings.print_formula {
        print_formula(formula.clauses().iter());
    }

    let verdict = if settings.solve {
        let solver = KissatSolver::new(settings.strategy);
        time!(kissat_time, verdict, solve_cnf_file(&solver, &settings.output));
        let verdict = verdict?;
        log::info!(
            "Verdict {}: graph is {}{}-colourable",
            verdict.as_bit(),
            if verdict.is_satisfiable() { "" } else { "not " },
            settings.colours
        );
        log::debug!("Solving took {:?}", kissat_time);
        do_if_some(settings.get_stats(), |stats| {
            stats.log_verdict(verdict, kissat_time)
        });
        Some(verdict)
    } else {
        None
    };

    if let Some(statistics) = settings.get_stats() {
        statistics.log_end();
        statistics.save_statistics()?;
    }

    Ok(verdict)
}

#[cfg(test)]
mod test {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;

    use crate::{parser::parse_cnf_file, sat_solving::BranchingStrategy};

    use super::*;

    fn graph_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf, Error> {
        let path = dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    fn solve_settings(input: PathBuf, output: PathBuf, colours: usize) -> Settings {
        let mut settings = Settings::new(input, colours);
        settings.output = output;
        settings.solve = true;
        settings
    }

    const TRIANGLE: &str = "c triangle
p edge 3 3
e 1 2
e 2 3
e 1 3
";

    #[test]
    fn test_single_edge() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let input = graph_file(&dir, "edge.col", "p edge 2 1\ne 1 2\n")?;
        let output = dir.path().join("edge.cnf");

        let mut settings = solve_settings(input, output.clone(), 2);
        assert_eq!(Some(Verdict::Satisfiable), run(&mut settings)?);

        let written = fs::read_to_string(&output)?;
        assert_eq!(
            "p cnf 4 6\n1 2 0\n3 4 0\n-2 -1 0\n-4 -3 0\n-1 -3 0\n-2 -4 0\n",
            written
        );

        Ok(())
    }

    #[test]
    fn test_triangle() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let input = graph_file(&dir, "triangle.col", TRIANGLE)?;

        for strategy in [
            BranchingStrategy::Default,
            BranchingStrategy::FrequentVariablesFirst,
        ]
        .iter()
        {
            let mut two = solve_settings(input.clone(), dir.path().join("k2.cnf"), 2);
            two.strategy = *strategy;
            assert_eq!(Some(Verdict::Unsatisfiable), run(&mut two)?);

            let mut three = solve_settings(input.clone(), dir.path().join("k3.cnf"), 3);
            three.strategy = *strategy;
            assert_eq!(Some(Verdict::Satisfiable), run(&mut three)?);
        }

        Ok(())
    }

    #[test]
    fn test_empty_graph() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let input = graph_file(&dir, "empty.col", "c nothing here\np edge 0 0\n")?;

        for colours in 1..4 {
            let output = dir.path().join(format!("empty{}.cnf", colours));
            let mut settings = solve_settings(input.clone(), output.clone(), colours);
            assert_eq!(Some(Verdict::Satisfiable), run(&mut settings)?);
            assert_eq!("p cnf 0 0\n", fs::read_to_string(&output)?);
        }

        Ok(())
    }

    #[test]
    fn test_malformed_graph_stops_pipeline() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let input = graph_file(&dir, "broken.col", "p edge 2 1\ne 1\n")?;
        let output = dir.path().join("broken.cnf");

        let mut settings = solve_settings(input, output.clone(), 2);
        assert!(matches!(
            run(&mut settings),
            Err(Error::ParseError { line: 2, .. })
        ));
        assert!(!output.exists());

        Ok(())
    }

    #[test]
    fn test_out_of_range_edge_stops_pipeline() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let input = graph_file(&dir, "truncated.col", "p edge 2 2\ne 1 2\ne 2 3\n")?;
        let output = dir.path().join("truncated.cnf");

        let encoded = encode_graph_file(&input, 2, &output, &mut None);
        assert!(matches!(encoded, Err(Error::GraphError(_))));
        assert!(!output.exists());

        Ok(())
    }

    #[test]
    fn test_byte_identical_output() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let input = graph_file(&dir, "triangle.col", TRIANGLE)?;
        let first = dir.path().join("first.cnf");
        let second = dir.path().join("second.cnf");

        encode_graph_file(&input, 4, &first, &mut None)?;
        encode_graph_file(&input, 4, &second, &mut None)?;
        assert_eq!(fs::read(&first)?, fs::read(&second)?);

        // Rerunning onto an existing file gives the same bytes again.
        let formula = encode_graph_file(&input, 4, &first, &mut None)?;
        assert_eq!(fs::read(&first)?, fs::read(&second)?);
        assert_eq!(formula, parse_cnf_file(&first)?);

        Ok(())
    }

    #[test]
    fn test_statistics_file() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let input = graph_file(&dir, "triangle.col", TRIANGLE)?;
        let stats_file = dir.path().join("stats.txt");

        let mut settings = solve_settings(input, dir.path().join("k3.cnf"), 3);
        settings.statistics = Some(Statistics::new(stats_file.clone()));
        run(&mut settings)?;

        let saved = fs::read_to_string(stats_file)?;
        assert!(saved.contains("vertex_count: 3"));
        assert!(saved.contains("Satisfiable"));

        Ok(())
    }
}
