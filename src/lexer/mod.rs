//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, integers, and operators
//! - Token start positions for error reporting
//! - Unrecognised characters, reported as `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;
