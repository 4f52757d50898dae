//! Runtime configuration for the front end.
//!
//! Tracing is off by default. Set `FRONTEND_TRACE` to a comma-separated list
//! of `lexer`, `parser` or `all` to print a trace of the corresponding stage
//! to stderr.

use std::env;

pub const TRACE_ENV_VAR: &str = "FRONTEND_TRACE";

/// Configuration for tracing/debugging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    pub trace_lexer: bool,
    pub trace_parser: bool,
}

impl TraceConfig {
    /// Reads the trace configuration from `FRONTEND_TRACE`.
    pub fn from_env() -> Self {
        match env::var(TRACE_ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::default(),
        }
    }

    /// Parses a value such as `"lexer,parser"`. Unknown entries are ignored.
    pub fn parse(value: &str) -> Self {
        let mut config = Self::default();

        for part in value.split(',').map(|p| p.trim().to_ascii_lowercase()) {
            match part.as_str() {
                "lexer" => config.trace_lexer = true,
                "parser" => config.trace_parser = true,
                "all" | "1" | "true" => {
                    config.trace_lexer = true;
                    config.trace_parser = true;
                }
                _ => {}
            }
        }

        config
    }
}
