use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Matched text is kept verbatim; no numeric conversion happens here, so the
/// exact literal spelling survives into the output.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens such as `42` or `3.14`, kept as raw text.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable or statement names such as `x` or `print`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Double-quoted string literal tokens, quotes included.
    #[regex(r#""[^"]*""#, |lex| lex.slice().to_string())]
    Str(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Represents a lexical token in a logical expression.
///
/// Only the closed keyword set `true`, `false`, `AND`, `OR`, `NOT`
/// (case-sensitive) and parentheses are ever emitted. The skipped word
/// pattern swallows any longer word with a keyword embedded in it (`truex`,
/// `NOTABLE`), which keeps keyword matching whole-word only; everything else
/// is dropped, so this lexer never produces identifier or numeric tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[A-Za-z0-9_]+")]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum LogicalToken {
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Splits an arithmetic expression string into tokens, in source order.
///
/// Characters that match no token pattern (a stray `=`, a lone `.`, an
/// unterminated quote) are skipped rather than reported: an expression with
/// nothing recognizable in it yields an empty stream, never an error.
///
/// # Examples
/// ```
/// use nvparse::parser::lexer::{Token, tokenize};
///
/// let tokens = tokenize("3 + x");
/// assert_eq!(tokens,
///            vec![Token::Number("3".to_string()),
///                 Token::Plus,
///                 Token::Identifier("x".to_string())]);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    Token::lexer(expression).filter_map(Result::ok).collect()
}

/// Splits a logical expression string into tokens, in source order.
///
/// Everything outside the closed keyword set and parentheses is dropped
/// silently, including numbers and would-be identifiers.
///
/// # Examples
/// ```
/// use nvparse::parser::lexer::{LogicalToken, tokenize_logical};
///
/// let tokens = tokenize_logical("x AND true");
/// assert_eq!(tokens, vec![LogicalToken::And, LogicalToken::True]);
/// ```
pub fn tokenize_logical(expression: &str) -> Vec<LogicalToken> {
    LogicalToken::lexer(expression).filter_map(Result::ok).collect()
}
