use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Represents one parsed script line.
///
/// A line is either an assignment (`x = <expression>`) or a bare statement
/// (`print <expression>`). Expression tokens are carried as raw text, in
/// reverse Polish order when the expression went through conversion, or
/// verbatim when a literal fast-path applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// An assignment line: the second whitespace token was `=`.
    Assignment {
        /// The identifier being assigned to (the line's first token).
        target: String,
        /// The assigned value: a single verbatim literal, or the right-hand
        /// expression's tokens in reverse Polish order.
        value:  Vec<String>,
    },
    /// Any other line: a statement name followed by an argument expression.
    Statement {
        /// The statement name (the line's first token).
        name: String,
        /// The argument expression's tokens in reverse Polish order.
        expr: Vec<String>,
    },
}

/// Serializes to the nested-array shape downstream consumers read:
/// `["x", ["=", ["5", "2", "+"]]]` for assignments and
/// `["print", [["x", "1", "+"]]]` for statements. The inner nesting tags
/// whether a value is being assigned, so it is part of the contract and a
/// derived form would not match it.
impl Serialize for Line {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        match self {
            Self::Assignment { target, value } => {
                seq.serialize_element(target)?;
                seq.serialize_element(&("=", value))?;
            },
            Self::Statement { name, expr } => {
                seq.serialize_element(name)?;
                seq.serialize_element(&(expr,))?;
            },
        }
        seq.end()
    }
}
