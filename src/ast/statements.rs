use std::{
    fmt::{self, Display},
    slice::Iter,
};

use super::expressions::{Expr, Identifier};

/// Statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    /// A bare block. The parser only builds blocks as parts of `if` and
    /// function literals, never as statements of their own.
    Block(BlockStmt),
}

/// `variable <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: Identifier,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

/// A bare expression used as a statement; the trailing `;` is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "variable {} = {};", stmt.name, stmt.value),
            Stmt::Return(stmt) => write!(f, "return {};", stmt.value),
            Stmt::Expression(stmt) => write!(f, "{};", stmt.expression),
            Stmt::Block(block) => write!(f, "{}", block),
        }
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for stmt in &self.statements {
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}
