//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - Anything convertible into the token's `String` literal
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        Token {
            kind: $kind,
            literal: String::from($literal),
        }
    };
}

/// Creates a default lexer handler for fixed one- or two-character tokens.
///
/// Generates a handler function that creates a token with the given kind
/// and advances the lexer past the token's text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^==").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "=="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            lexer.advance_n($value.len());
            Some($crate::MK_TOKEN!($kind, $value))
        }
    };
}
