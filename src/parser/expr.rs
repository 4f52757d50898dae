use crate::{
    ast::expressions::{
        BooleanExpr, CallExpr, Expr, FunctionExpr, Identifier, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_handler, nud_handler, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| parser.traced("parse_expr", |parser| parse_expr_inner(parser, bp)))
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = nud_handler(token_kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.get_position(),
        )
    })?;

    let mut left = nud(parser)?;

    // While the next token binds tighter than `bp`, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon
        && binding_power(parser.peek_token_kind()) > bp
    {
        let led = match led_handler(parser.peek_token_kind()) {
            Some(led) => led,
            None => return Ok(left),
        };

        parser.advance();
        left = led(parser, left, binding_power(parser.current_token_kind()))?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::identifier(parser.current_token().literal.clone()))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let literal = &parser.current_token().literal;

    match literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { value })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: literal.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Boolean(BooleanExpr {
        value: parser.current_token_kind() == TokenKind::True,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.current_token().literal.clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        right: Box::new(right),
    }))
}

/// `( expr )`. A missing `)` is reported and the inner expression kept.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    if let Err(error) = parser.expect_peek(TokenKind::RParen) {
        parser.report(error);
    }

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::RParen)?;
    parser.expect_peek(TokenKind::LBrace)?;

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_peek(TokenKind::LParen)?;

    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser);

    Ok(Expr::Function(FunctionExpr { parameters, body }))
}

// Starts on `(`, ends on `)`.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::RParen {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(Identifier::new(parser.current_token().literal.clone()));

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::new(parser.current_token().literal.clone()));
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(parameters)
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.current_token().literal.clone();
    parser.advance();

    // Same binding power on the right keeps equal-precedence chains
    // left-associative.
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let arguments = parse_call_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        function: Box::new(left),
        arguments,
    }))
}

// Starts on `(`. A missing argument or `)` is reported and the arguments read
// so far kept.
fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::RParen {
        parser.advance();
        return Ok(arguments);
    }

    loop {
        let next_kind = parser.peek_token_kind();
        if nud_handler(next_kind).is_none() {
            parser.report(Error::new(
                ErrorImpl::NoPrefixParseFn { kind: next_kind },
                parser.get_peek_position(),
            ));

            if next_kind == TokenKind::RParen {
                parser.advance();
            }
            return Ok(arguments);
        }

        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);

        if parser.peek_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    if let Err(error) = parser.expect_peek(TokenKind::RParen) {
        parser.report(error);
    }

    Ok(arguments)
}
