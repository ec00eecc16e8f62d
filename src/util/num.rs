/// Parses the longest numeric prefix of a string as an `f64`.
///
/// This is the permissive test behind number-literal classification: the
/// whole string does not have to be numeric, only its leading part. `"3x"`
/// yields `Some(3.0)` because the parse succeeds on the `3` prefix, while a
/// string with no numeric prefix at all yields `None`. A prefix that parses
/// to NaN never classifies as numeric.
///
/// # Parameters
/// - `text`: The candidate literal text.
///
/// # Returns
/// - `Some(f64)`: The value of the longest parseable prefix.
/// - `None`: If no prefix parses, or the longest parseable prefix is NaN.
///
/// # Examples
/// ```
/// use nvparse::util::num::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("5"), Some(5.0));
/// assert_eq!(parse_float_prefix("3.25"), Some(3.25));
/// assert_eq!(parse_float_prefix("3x"), Some(3.0));
/// assert_eq!(parse_float_prefix("-2.5"), Some(-2.5));
/// assert_eq!(parse_float_prefix("x3"), None);
/// assert_eq!(parse_float_prefix(""), None);
/// ```
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    (1..=text.len()).rev()
                    .filter(|&end| text.is_char_boundary(end))
                    .find_map(|end| text[..end].parse::<f64>().ok())
                    .filter(|value| !value.is_nan())
}
