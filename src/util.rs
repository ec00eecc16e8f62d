/// Numeric helpers.
///
/// This module provides the permissive numeric classification used when
/// deciding whether an assignment's right-hand side is a number literal.
/// The test works on prefixes rather than whole strings, which is part of
/// the language's observable behavior.
pub mod num;
