mod cnf_parser;
mod col_parser;

pub use cnf_parser::{parse_cnf, parse_cnf_file};
pub use col_parser::{parse_col, parse_graph_file};

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;

/// Tells whether the first whitespace separated token of a line is exactly `tag`.
fn starts_with_token(line: Input<'_>, tag: &str) -> bool {
    line.split_whitespace().next() == Some(tag)
}
