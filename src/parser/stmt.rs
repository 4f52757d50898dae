use crate::{
    ast::{
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{
        expr::parse_expr,
        lookups::{stmt_handler, BindingPower},
    },
};

use super::parser::Parser;

// Statement handlers start on the statement's first token and leave the
// parser on its last one (the `;` when present).

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.traced("parse_stmt", |parser| -> Result<Stmt, Error> {
        if let Some(handler) = stmt_handler(parser.current_token_kind()) {
            return handler(parser);
        }

        parse_expression_stmt(parser)
    })
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.peek_token_kind() != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.peek_token().literal.clone(),
                message: String::from("expected identifier after let"),
            },
            parser.get_peek_position(),
        ));
    }
    parser.advance();

    let name = Identifier::new(parser.current_token().literal.clone());

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Let(LetStmt { name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt { value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

/// Parses `{ ... }` starting on the `{`.
///
/// Ends on the closing `}`, or on `EOF` when the block is never closed. A
/// statement that fails inside the block is reported and skipped; the rest
/// of the block is still collected.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    parser.traced("parse_block_stmt", |parser| {
        parser.advance();

        let mut statements = Vec::new();
        while !parser
            .current_token()
            .is_one_of_many(&[TokenKind::RBrace, TokenKind::EOF])
        {
            match parse_stmt(parser) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    parser.report(error);
                    parser.synchronize();

                    if parser.current_token_kind() == TokenKind::RBrace {
                        continue;
                    }
                }
            }

            parser.advance();
        }

        BlockStmt { statements }
    })
}
