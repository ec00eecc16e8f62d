use crate::parser::lexer::{LogicalToken, Token};

/// Grouping rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// Evaluate leftmost first: `8 - 3 - 2` groups as `(8 - 3) - 2`.
    Left,
    /// Evaluate rightmost first: `NOT NOT x` groups as `NOT (NOT x)`.
    Right,
}

/// Binding strength and grouping rule for one operator.
#[derive(Debug, Clone, Copy)]
pub struct OpSpec {
    /// Binding strength; higher binds tighter.
    pub precedence: u8,
    /// Grouping rule among operators of equal precedence.
    pub assoc:      Assoc,
}

/// An immutable operator table, built once and passed by reference into
/// [`to_rpn`].
#[derive(Debug, Clone, Copy)]
pub struct OpTable {
    entries: &'static [(&'static str, OpSpec)],
}

impl OpTable {
    /// Looks up the spec for an operator symbol.
    pub fn get(&self, symbol: &str) -> Option<OpSpec> {
        self.entries
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map(|(_, spec)| *spec)
    }
}

/// Operator table for arithmetic expressions. `*` and `/` bind tighter than
/// `+`, `-`, and the `>` comparison; everything is left-associative.
pub static ARITHMETIC_OPS: OpTable =
    OpTable { entries: &[("+", OpSpec { precedence: 1, assoc: Assoc::Left }),
                         ("-", OpSpec { precedence: 1, assoc: Assoc::Left }),
                         ("*", OpSpec { precedence: 2, assoc: Assoc::Left }),
                         ("/", OpSpec { precedence: 2, assoc: Assoc::Left }),
                         (">", OpSpec { precedence: 1, assoc: Assoc::Left })] };

/// Operator table for logical expressions. `NOT` binds tightest and is
/// right-associative, as a unary operator must be for `NOT NOT x` to group
/// as `NOT (NOT x)`.
pub static LOGICAL_OPS: OpTable =
    OpTable { entries: &[("OR", OpSpec { precedence: 1, assoc: Assoc::Left }),
                         ("AND", OpSpec { precedence: 2, assoc: Assoc::Left }),
                         ("NOT", OpSpec { precedence: 3, assoc: Assoc::Right })] };

/// How the converter treats one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole<'a> {
    /// A value: emitted straight to the output sequence.
    Operand,
    /// An operator: held on the stack until precedence forces it out.
    Operator(&'a str),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

/// A token the shunting-yard routine can reorder.
///
/// Both token types implement this, so the conversion algorithm is written
/// once, over the role view, and the pipelines differ only in their operator
/// tables.
pub trait ShuntToken: Clone {
    /// The role this token plays during conversion.
    fn role(&self) -> TokenRole<'_>;

    /// The raw text this token contributes to the output sequence.
    fn text(&self) -> &str;
}

impl ShuntToken for Token {
    fn role(&self) -> TokenRole<'_> {
        match self {
            Self::Number(_) | Self::Identifier(_) | Self::Str(_) => TokenRole::Operand,
            Self::Plus => TokenRole::Operator("+"),
            Self::Minus => TokenRole::Operator("-"),
            Self::Star => TokenRole::Operator("*"),
            Self::Slash => TokenRole::Operator("/"),
            Self::Greater => TokenRole::Operator(">"),
            Self::LParen => TokenRole::OpenParen,
            Self::RParen => TokenRole::CloseParen,
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::Identifier(text) | Self::Str(text) => text,
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Greater => ">",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

impl ShuntToken for LogicalToken {
    fn role(&self) -> TokenRole<'_> {
        match self {
            Self::True | Self::False => TokenRole::Operand,
            Self::And => TokenRole::Operator("AND"),
            Self::Or => TokenRole::Operator("OR"),
            Self::Not => TokenRole::Operator("NOT"),
            Self::LParen => TokenRole::OpenParen,
            Self::RParen => TokenRole::CloseParen,
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

/// Converts an infix token stream to postfix (reverse Polish) order.
///
/// Classic shunting-yard over the role view:
/// - operands go straight to the output;
/// - an operator first pops every stacked operator that outranks it (equal
///   precedence pops too when the incoming operator is left-associative,
///   which makes `8 - 3 - 2` come out as `(8 - 3) - 2`), then is pushed;
/// - `(` is pushed unconditionally; `)` pops operators to the output until
///   the matching `(` is popped and discarded.
///
/// Malformed input degrades instead of failing: an unmatched `)` just drains
/// the stack, and an unmatched `(` is still on the stack at the end of the
/// scan, so the final flush emits it into the output as a literal token.
/// Callers that want balanced parentheses enforced must check beforehand.
///
/// # Examples
/// ```
/// use nvparse::parser::{
///     lexer::tokenize,
///     shunt::{ARITHMETIC_OPS, ShuntToken, to_rpn},
/// };
///
/// let rpn = to_rpn(&tokenize("3 + 4 * 2"), &ARITHMETIC_OPS);
/// let texts: Vec<&str> = rpn.iter().map(ShuntToken::text).collect();
/// assert_eq!(texts, ["3", "4", "2", "*", "+"]);
/// ```
pub fn to_rpn<T: ShuntToken>(tokens: &[T], ops: &OpTable) -> Vec<T> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<T> = Vec::new();

    for token in tokens {
        match token.role() {
            TokenRole::Operand => output.push(token.clone()),

            TokenRole::Operator(symbol) => {
                let Some(spec) = ops.get(symbol) else {
                    // Not in the table: nothing to rank it against, so it
                    // passes through like an operand.
                    output.push(token.clone());
                    continue;
                };
                while let Some(top) = stack.pop() {
                    if outranks(&top, spec, ops) {
                        output.push(top);
                    } else {
                        stack.push(top);
                        break;
                    }
                }
                stack.push(token.clone());
            },

            TokenRole::OpenParen => stack.push(token.clone()),

            TokenRole::CloseParen => {
                // Pop to the matching `(` and discard it. An unmatched `)`
                // drains the stack and stops, silently.
                while let Some(top) = stack.pop() {
                    if matches!(top.role(), TokenRole::OpenParen) {
                        break;
                    }
                    output.push(top);
                }
            },
        }
    }

    // Flush the stack, top first. An unmatched `(` leaks into the output
    // here; see above.
    while let Some(top) = stack.pop() {
        output.push(top);
    }

    output
}

/// Whether the stacked `top` token must be popped before `current` is pushed.
///
/// Open parentheses never outrank: they fence off the stack below them.
fn outranks<T: ShuntToken>(top: &T, current: OpSpec, ops: &OpTable) -> bool {
    let TokenRole::Operator(symbol) = top.role() else {
        return false;
    };
    let Some(top_spec) = ops.get(symbol) else {
        return false;
    };
    match current.assoc {
        Assoc::Left => top_spec.precedence >= current.precedence,
        Assoc::Right => top_spec.precedence > current.precedence,
    }
}
