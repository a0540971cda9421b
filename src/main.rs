#![warn(rust_2018_idioms)]
//#![deny(warnings, missing_docs)]

//! Reduction of graph k-colouring to SAT.
//! Reads a graph in DIMACS syntax, writes a CNF formula
//! that is satisfiable iff the graph is k-colourable
//! and optionally lets Kissat decide it.

mod graph;

mod input;
use input::read_settings;

mod encoding;

mod dimacs;

mod sat_solving;

mod parser;

mod pipeline;
use pipeline::run;

mod statistics;

mod misc;
pub use misc::do_if_some;

mod debug;
pub use debug::Error;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Error> {
    let mut settings = read_settings()?;

    if let Some(verdict) = run(&mut settings)? {
        println!("{}", verdict.as_bit());
    }

    Ok(())
}
