//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! the lexer on demand and keeps exactly two of them in view: the current
//! token and the one after it (the peek token). Expression parsing uses a
//! Pratt parser with NUD/LED handlers (see `lookups`).
//!
//! Syntax errors never abort the parse. Each one is recorded as a diagnostic,
//! the offending statement is skipped, and parsing resumes with the next one.

use crate::{
    ast::ast::Program,
    config::TraceConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, MK_TOKEN,
};

use super::stmt::parse_stmt;

/// Deepest expression nesting the parser descends into before giving up on
/// the statement.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, advanced one token at a time
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// The token after `current`
    peek: Token,
    current_position: Position,
    peek_position: Position,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    trace: bool,
    trace_indent: usize,
    /// Expressions currently being parsed, innermost included
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`, with tracing disabled.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_config(lexer, &TraceConfig::default())
    }

    /// Creates a new Parser, enabling lexer and parser tracing as configured.
    pub fn with_config(mut lexer: Lexer, config: &TraceConfig) -> Self {
        lexer.set_trace(config.trace_lexer);
        let position = Position(0, lexer.get_file());

        let mut parser = Parser {
            lexer,
            current: MK_TOKEN!(TokenKind::EOF, ""),
            peek: MK_TOKEN!(TokenKind::EOF, ""),
            current_position: position.clone(),
            peek_position: position,
            errors: vec![],
            trace: config.trace_parser,
            trace_indent: 0,
            depth: 0,
        };

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the peek token into the current slot and pulls a new peek
    /// token from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        let next_position = self.lexer.get_position();

        self.current = std::mem::replace(&mut self.peek, next);
        self.current_position = std::mem::replace(&mut self.peek_position, next_position);
    }

    /// Advances only if the peek token has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) after advancing, otherwise an `ExpectedToken` error
    /// positioned at the peek token. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek.kind == expected_kind {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.get_peek_position(),
            ))
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns the position of the current token in the source file.
    pub fn get_position(&self) -> Position {
        self.current_position.clone()
    }

    pub fn get_peek_position(&self) -> Position {
        self.peek_position.clone()
    }

    /// Records a diagnostic without interrupting the parse.
    pub fn report(&mut self, error: Error) {
        if self.trace {
            eprintln!("{}ERROR {}", ".  ".repeat(self.trace_indent), error);
        }
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Diagnostics rendered as messages, in the order they were found.
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Skips the rest of a statement that failed to parse.
    ///
    /// Stops on the statement's `;`, on a `}` or `EOF`, or just before a
    /// token that closes a block or starts a new statement, so the caller's
    /// next `advance` lands on fresh input.
    pub fn synchronize(&mut self) {
        while !self.current.is_one_of_many(&[
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::EOF,
        ]) && !self.peek.is_one_of_many(&[
            TokenKind::RBrace,
            TokenKind::Let,
            TokenKind::Return,
            TokenKind::EOF,
        ]) {
            self.advance();
        }
    }

    /// Runs `f`, printing an indented BEGIN/END trace around it when parser
    /// tracing is enabled.
    pub fn traced<T>(&mut self, name: &str, f: impl FnOnce(&mut Parser) -> T) -> T {
        if !self.trace {
            return f(self);
        }

        eprintln!(
            "{}BEGIN {} ({:?} {:?})",
            ".  ".repeat(self.trace_indent),
            name,
            self.current.kind,
            self.current.literal
        );
        self.trace_indent += 1;

        let result = f(self);

        self.trace_indent -= 1;
        eprintln!("{}END {}", ".  ".repeat(self.trace_indent), name);

        result
    }

    /// Runs `f` one expression level deeper.
    ///
    /// Fails with `NestingTooDeep` at the current token instead of calling
    /// `f` once `MAX_NESTING_DEPTH` levels are open.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }

    /// Parses statements until EOF.
    ///
    /// Always returns a program, even when diagnostics were recorded; callers
    /// must check the returned diagnostics before trusting the tree.
    pub fn parse_program(&mut self) -> (Program, Vec<Error>) {
        let mut program = Program::default();

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.report(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        (program, self.errors.clone())
    }
}

/// Parses a source string into a Program.
///
/// This is the main entry point for parsing. It builds a lexer over
/// `source` and runs a parser over it in a single pass.
///
/// # Arguments
///
/// * `source` - The full program text
/// * `file` - Name used in diagnostic positions; defaults to `shell`
///
/// # Returns
///
/// A tuple containing the Program and every diagnostic, in source order.
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    parser.parse_program()
}
