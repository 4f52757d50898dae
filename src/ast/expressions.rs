use std::fmt::{self, Display};

use super::statements::BlockStmt;

/// Expression node.
///
/// Every variant owns its children outright, so a tree can be cloned,
/// compared and dropped without any shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

// LITERALS

/// Identifier
/// A name, either referenced in an expression or bound by `variable` / a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerExpr {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanExpr {
    pub value: bool,
}

// COMPLEX

/// Prefix Expression
/// Unary `!` or `-` applied to the expression on its right.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub right: Box<Expr>,
}

/// Infix Expression
/// A binary operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

/// Function Literal
/// An anonymous function; binding it to a name is done with `variable`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Expr {
    pub fn identifier(value: impl Into<String>) -> Expr {
        Expr::Identifier(Identifier::new(value))
    }

    pub fn integer(value: i64) -> Expr {
        Expr::Integer(IntegerExpr { value })
    }

    pub fn boolean(value: bool) -> Expr {
        Expr::Boolean(BooleanExpr { value })
    }

    pub fn prefix(operator: impl Into<String>, right: Expr) -> Expr {
        Expr::Prefix(PrefixExpr {
            operator: operator.into(),
            right: Box::new(right),
        })
    }

    pub fn infix(left: Expr, operator: impl Into<String>, right: Expr) -> Expr {
        Expr::Infix(InfixExpr {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        })
    }

    pub fn call(function: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpr {
            function: Box::new(function),
            arguments,
        })
    }
}

fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(identifier) => write!(f, "{}", identifier),
            Expr::Integer(integer) => write!(f, "{}", integer.value),
            Expr::Boolean(boolean) => write!(f, "{}", boolean.value),
            Expr::Prefix(prefix) => write!(f, "({}{})", prefix.operator, prefix.right),
            Expr::Infix(infix) => {
                write!(f, "({} {} {})", infix.left, infix.operator, infix.right)
            }
            Expr::If(if_expr) => {
                write!(f, "if ({}) {}", if_expr.condition, if_expr.consequence)?;
                if let Some(alternative) = &if_expr.alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expr::Function(function) => {
                write!(f, "function(")?;
                write_list(f, &function.parameters)?;
                write!(f, ") {}", function.body)
            }
            Expr::Call(call) => {
                write!(f, "{}(", call.function)?;
                write_list(f, &call.arguments)?;
                write!(f, ")")
            }
        }
    }
}
