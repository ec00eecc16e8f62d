/// The lexer module tokenizes expression text.
///
/// Two lexers live here: the arithmetic tokenizer, which recognizes numbers,
/// identifiers, operators, parentheses, and quoted strings, and the logical
/// tokenizer, which recognizes only the closed keyword set `true`, `false`,
/// `AND`, `OR`, `NOT` plus parentheses. Both keep the matched text verbatim
/// and skip anything they do not recognize.
///
/// # Responsibilities
/// - Converts expression strings into ordered streams of tagged tokens.
/// - Decides token kind once, at lexing time.
/// - Drops unrecognizable input instead of failing.
pub mod lexer;
/// The line module classifies one script line.
///
/// A line whose second token is `=` is an assignment; its right-hand side is
/// checked against the literal fast-paths (string, boolean, number) before
/// falling back to full expression conversion. Every other line is a
/// statement whose remaining tokens form the argument expression.
///
/// # Responsibilities
/// - Splits a line into its classification tokens.
/// - Applies literal fast-paths without tokenizing.
/// - Delegates computed expressions to the arithmetic pipeline.
pub mod line;
/// The shunt module reorders infix token streams into postfix.
///
/// One generic shunting-yard routine serves both the arithmetic and the
/// logical pipeline; the differences between them live entirely in their
/// operator tables (precedence and associativity per operator).
///
/// # Responsibilities
/// - Defines the immutable operator tables.
/// - Converts token streams to reverse Polish notation.
/// - Tolerates unbalanced parentheses without failing.
pub mod shunt;
