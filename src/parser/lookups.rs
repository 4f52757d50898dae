use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

// The tables below match every TokenKind explicitly, so adding a kind
// forces a decision here.

/// Statement handler for tokens that start a dedicated statement form.
/// Anything else is parsed as an expression statement.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        _ => None,
    }
}

/// Null denotation: how a token begins an expression.
pub fn nud_handler(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        TokenKind::Identifier => Some(parse_identifier_expr),
        TokenKind::Integer => Some(parse_integer_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean_expr),
        TokenKind::Negation | TokenKind::Minus => Some(parse_prefix_expr),
        TokenKind::LParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Function => Some(parse_function_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Assign
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Plus
        | TokenKind::Multiplication
        | TokenKind::Division
        | TokenKind::Lt
        | TokenKind::Lte
        | TokenKind::Gt
        | TokenKind::Gte
        | TokenKind::Eq
        | TokenKind::Dif
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

/// Left denotation: how a token continues an expression already parsed.
pub fn led_handler(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        // Equality
        TokenKind::Eq | TokenKind::Dif => Some(parse_infix_expr),

        // Relational
        TokenKind::Lt | TokenKind::Lte | TokenKind::Gt | TokenKind::Gte => Some(parse_infix_expr),

        // Additive and multiplicative
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Multiplication
        | TokenKind::Division => Some(parse_infix_expr),

        TokenKind::LParen => Some(parse_call_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::Assign
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Negation
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return
        | TokenKind::True
        | TokenKind::False => None,
    }
}

/// Precedence a token has when it appears in infix position.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Eq | TokenKind::Dif => BindingPower::Equals,
        TokenKind::Lt | TokenKind::Lte | TokenKind::Gt | TokenKind::Gte => {
            BindingPower::LessGreater
        }
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Multiplication | TokenKind::Division => BindingPower::Product,
        TokenKind::LParen => BindingPower::Call,

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::Assign
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Negation
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return
        | TokenKind::True
        | TokenKind::False => BindingPower::Lowest,
    }
}
