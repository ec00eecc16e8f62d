use nvparse::{
    ast::Line,
    parse_script,
    parser::{
        lexer::{LogicalToken, tokenize, tokenize_logical},
        line::parse_line,
        shunt::{ARITHMETIC_OPS, LOGICAL_OPS, ShuntToken, to_rpn},
    },
};

fn texts<T: ShuntToken>(tokens: &[T]) -> Vec<String> {
    tokens.iter().map(|t| t.text().to_string()).collect()
}

fn rpn_of(expression: &str) -> Vec<String> {
    texts(&to_rpn(&tokenize(expression), &ARITHMETIC_OPS))
}

fn logical_rpn_of(expression: &str) -> Vec<String> {
    texts(&to_rpn(&tokenize_logical(expression), &LOGICAL_OPS))
}

fn json_of(line: &str) -> String {
    serde_json::to_string(&parse_line(line)).expect("line serialization cannot fail")
}

#[test]
fn tokenizer_splits_expressions() {
    assert_eq!(texts(&tokenize("3 + 4 * 2")), ["3", "+", "4", "*", "2"]);
    assert_eq!(texts(&tokenize("(a+b)/2")), ["(", "a", "+", "b", ")", "/", "2"]);
    assert_eq!(texts(&tokenize(r#"say "hello world" 2"#)),
               ["say", "\"hello world\"", "2"]);
}

#[test]
fn tokenizer_keeps_literal_text() {
    assert_eq!(texts(&tokenize("3.50 + 07")), ["3.50", "+", "07"]);
}

#[test]
fn tokenizer_skips_unrecognized_text() {
    // `=` and `.` match nothing; a digit can't start an identifier, so the
    // number and the word that follows it split apart.
    assert_eq!(texts(&tokenize("x == 5")), ["x", "5"]);
    assert_eq!(texts(&tokenize("123abc")), ["123", "abc"]);
    assert_eq!(texts(&tokenize(".5")), ["5"]);
    assert!(tokenize("= . ;").is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(rpn_of("3 + 4 * 2"), ["3", "4", "2", "*", "+"]);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(rpn_of("( 3 + 4 ) * 2"), ["3", "4", "+", "2", "*"]);
}

#[test]
fn equal_precedence_groups_left() {
    assert_eq!(rpn_of("8 - 3 - 2"), ["8", "3", "-", "2", "-"]);
    assert_eq!(rpn_of("12 / 3 / 2"), ["12", "3", "/", "2", "/"]);
}

#[test]
fn comparison_is_an_ordinary_operator() {
    assert_eq!(rpn_of("x > 3"), ["x", "3", ">"]);
}

#[test]
fn identifiers_pass_through_as_operands() {
    assert_eq!(rpn_of("price * count + tax"),
               ["price", "count", "*", "tax", "+"]);
}

#[test]
fn conversion_preserves_token_counts() {
    let rpn = rpn_of("1 + 2 * ( 3 - 4 ) / 5");
    assert_eq!(rpn, ["1", "2", "3", "4", "-", "*", "5", "/", "+"]);

    let operators = rpn.iter()
                       .filter(|t| ARITHMETIC_OPS.get(t.as_str()).is_some())
                       .count();
    assert_eq!(operators, 4);
    assert_eq!(rpn.len() - operators, 5);
}

#[test]
fn unmatched_parens_degrade_silently() {
    // A leftover `(` is flushed into the output; a stray `)` just stops.
    assert_eq!(rpn_of("( 3 + 4"), ["3", "4", "+", "("]);
    assert_eq!(rpn_of("3 + 4 )"), ["3", "4", "+"]);
}

#[test]
fn literal_assignments_short_circuit() {
    assert_eq!(parse_line(r#"greeting = "hello there""#),
               Line::Assignment { target: "greeting".to_string(),
                                  value:  vec!["\"hello there\"".to_string()] });
    assert_eq!(parse_line("flag = true"),
               Line::Assignment { target: "flag".to_string(),
                                  value:  vec!["true".to_string()] });
    assert_eq!(parse_line("x = 5"),
               Line::Assignment { target: "x".to_string(),
                                  value:  vec!["5".to_string()] });
}

#[test]
fn numeric_prefix_check_is_permissive() {
    // `3x` parses as numeric through its `3` prefix and contains no
    // arithmetic operator, so the raw text is kept as a literal.
    assert_eq!(parse_line("x = 3x"),
               Line::Assignment { target: "x".to_string(),
                                  value:  vec!["3x".to_string()] });
}

#[test]
fn operators_force_conversion() {
    // `5 + 2` would parse as a number by prefix, but the `+` is decisive.
    assert_eq!(parse_line("x = 5 + 2"),
               Line::Assignment { target: "x".to_string(),
                                  value:  vec!["5".to_string(),
                                               "2".to_string(),
                                               "+".to_string()] });
    // Negative literals contain `-`, so they convert too.
    assert_eq!(parse_line("x = -5"),
               Line::Assignment { target: "x".to_string(),
                                  value:  vec!["5".to_string(), "-".to_string()] });
}

#[test]
fn assignment_splits_on_first_equals_only() {
    assert_eq!(parse_line(r#"pair = "a=b""#),
               Line::Assignment { target: "pair".to_string(),
                                  value:  vec!["\"a=b\"".to_string()] });
}

#[test]
fn statement_lines() {
    assert_eq!(parse_line("print x + 1"),
               Line::Statement { name: "print".to_string(),
                                 expr: vec!["x".to_string(),
                                            "1".to_string(),
                                            "+".to_string()] });

    let halt = parse_line("halt");
    assert_eq!(halt,
               Line::Statement { name: "halt".to_string(),
                                 expr: Vec::new() });
}

#[test]
fn logical_tokenizer_keeps_whole_keywords_only() {
    assert_eq!(texts(&tokenize_logical("true AND false OR true")),
               ["true", "AND", "false", "OR", "true"]);
    // Keywords embedded in longer words don't count, and anything outside
    // the keyword set is dropped.
    assert_eq!(tokenize_logical("truthy AND NOTABLE"), [LogicalToken::And]);
    assert_eq!(tokenize_logical("1 + true"), [LogicalToken::True]);
    assert!(tokenize_logical("x y z").is_empty());
}

#[test]
fn logical_conversion_precedence() {
    assert_eq!(logical_rpn_of("true AND false OR true"),
               ["true", "false", "AND", "true", "OR"]);
    assert_eq!(logical_rpn_of("NOT true AND false"),
               ["true", "NOT", "false", "AND"]);
}

#[test]
fn not_is_right_associative() {
    assert_eq!(logical_rpn_of("NOT NOT true"), ["true", "NOT", "NOT"]);
}

#[test]
fn logical_parentheses() {
    assert_eq!(logical_rpn_of("NOT ( true OR false )"),
               ["true", "false", "OR", "NOT"]);
}

#[test]
fn json_shapes() {
    assert_eq!(json_of("x = 5"), r#"["x",["=",["5"]]]"#);
    assert_eq!(json_of("x = 5 + 2"), r#"["x",["=",["5","2","+"]]]"#);
    assert_eq!(json_of(r#"x = "hello""#), r#"["x",["=",["\"hello\""]]]"#);
    assert_eq!(json_of("print x + 1"), r#"["print",[["x","1","+"]]]"#);
    assert_eq!(json_of("halt"), r#"["halt",[[]]]"#);
}

#[test]
fn script_driver_skips_blank_lines() {
    let script = "  x = 1  \n\n   \nprint x\n";
    let lines = parse_script(script);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0],
               Line::Assignment { target: "x".to_string(),
                                  value:  vec!["1".to_string()] });
    assert_eq!(lines[1],
               Line::Statement { name: "print".to_string(),
                                 expr: vec!["x".to_string()] });
}
