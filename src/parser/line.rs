use crate::{
    ast::Line,
    parser::{
        lexer::tokenize,
        shunt::{ARITHMETIC_OPS, ShuntToken, to_rpn},
    },
    util::num::parse_float_prefix,
};

/// Classifies one script line as an assignment or a bare statement.
///
/// The line is split on runs of spaces. When the second token is `=`, the
/// line is an assignment: the first token is the target, and the right-hand
/// side is everything after the *first* `=` in the raw line, so the value
/// text may itself contain `=` characters. The right-hand side is checked
/// against the literal fast-paths, in order:
///
/// 1. starts and ends with `"`: a string literal, kept verbatim;
/// 2. exactly `true` or `false`: a boolean literal, kept verbatim;
/// 3. has a numeric prefix and none of `+ - * /`: a number literal, kept
///    verbatim (the prefix test is deliberately permissive: `3x` passes);
/// 4. anything else is run through the arithmetic pipeline.
///
/// Every other line is a statement: the first token is its name, and the
/// remaining tokens, rejoined with single spaces, form the argument
/// expression for the arithmetic pipeline.
///
/// Classification is total (no input line fails) and performs no I/O.
///
/// # Examples
/// ```
/// use nvparse::{ast::Line, parser::line::parse_line};
///
/// assert_eq!(parse_line("x = 5 + 2"),
///            Line::Assignment { target: "x".to_string(),
///                               value:  vec!["5".to_string(),
///                                            "2".to_string(),
///                                            "+".to_string()] });
/// assert_eq!(parse_line("print y"),
///            Line::Statement { name: "print".to_string(),
///                              expr: vec!["y".to_string()] });
/// ```
pub fn parse_line(line: &str) -> Line {
    let tokens: Vec<&str> = line.trim().split(' ').filter(|t| !t.is_empty()).collect();

    if tokens.get(1).copied() == Some("=") {
        let target = tokens[0].to_string();
        let expression = line.split_once('=').map_or("", |(_, rhs)| rhs).trim();

        return Line::Assignment { target,
                                  value: classify_value(expression) };
    }

    let name = tokens.first().copied().unwrap_or_default().to_string();
    let expression = tokens.get(1..).unwrap_or_default().join(" ");

    Line::Statement { name,
                      expr: rpn_texts(&expression) }
}

/// Applies the literal fast-paths to an assignment's right-hand side,
/// falling back to expression conversion.
///
/// Literals skip tokenization entirely so their exact spelling survives:
/// the whole right-hand side becomes the single element of the value list.
fn classify_value(expression: &str) -> Vec<String> {
    if expression.starts_with('"') && expression.ends_with('"') {
        return vec![expression.to_string()];
    }
    if expression == "true" || expression == "false" {
        return vec![expression.to_string()];
    }
    if parse_float_prefix(expression).is_some()
       && !expression.contains(['+', '-', '*', '/'])
    {
        return vec![expression.to_string()];
    }
    rpn_texts(expression)
}

/// Runs an expression through the arithmetic pipeline and returns the
/// postfix token texts.
fn rpn_texts(expression: &str) -> Vec<String> {
    to_rpn(&tokenize(expression), &ARITHMETIC_OPS).iter()
                                                  .map(|token| token.text().to_string())
                                                  .collect()
}
