//! # nvparse
//!
//! nvparse is a parser for small line-oriented scripts. Every non-empty line
//! becomes one structured value: a variable assignment (literal or computed
//! expression) or a bare statement wrapping an expression. Expressions are
//! lowered from infix to reverse Polish notation with the shunting-yard
//! algorithm; a parallel pipeline handles logical expressions (`AND`, `OR`,
//! `NOT`). Nothing is ever evaluated: the crate parses and reorders tokens,
//! it never computes values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]

use crate::{ast::Line, parser::line::parse_line};

/// Defines the structure of parsed lines.
///
/// This module declares the `Line` enum that represents the per-line result
/// of parsing: an assignment carrying its value tokens, or a statement
/// carrying its argument expression. It also controls how those results
/// serialize, so downstream consumers see a stable shape.
///
/// # Responsibilities
/// - Defines the assignment and statement result variants.
/// - Serializes results into the nested-array form consumers expect.
pub mod ast;
/// Turns raw script text into structured per-line values.
///
/// The parser module holds the whole text-processing pipeline: two lexers
/// (arithmetic and logical), the shunting-yard conversion that reorders infix
/// token streams into postfix, and the line classifier that decides whether a
/// line is an assignment or a statement.
///
/// # Responsibilities
/// - Tokenizes expression text into tagged tokens.
/// - Converts infix token streams to reverse Polish notation.
/// - Classifies script lines and applies literal fast-paths.
pub mod parser;
/// General utilities shared across the parsing pipeline.
///
/// This module provides small reusable helpers that are not specific to a
/// single phase, such as the permissive numeric-prefix parse used by literal
/// classification.
///
/// # Responsibilities
/// - Provides numeric helpers used during line classification.
pub mod util;

/// Parses every non-empty line of a script, in order.
///
/// Each line is trimmed before classification and blank lines produce no
/// entry. Parsing is total: malformed expressions degrade to whatever tokens
/// could be recognized rather than failing (see [`parser::shunt::to_rpn`]),
/// so there is no error case to handle.
///
/// # Examples
/// ```
/// use nvparse::{ast::Line, parse_script};
///
/// let script = "x = 5\n\ny = x + 2\nprint y";
/// let lines = parse_script(script);
///
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[0],
///            Line::Assignment { target: "x".to_string(),
///                               value:  vec!["5".to_string()] });
/// assert_eq!(lines[1],
///            Line::Assignment { target: "y".to_string(),
///                               value:  vec!["x".to_string(),
///                                            "2".to_string(),
///                                            "+".to_string()] });
/// ```
pub fn parse_script(source: &str) -> Vec<Line> {
    source.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty())
          .map(parse_line)
          .collect()
}
