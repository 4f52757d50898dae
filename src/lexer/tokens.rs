use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map.insert("variable", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

/// Returns the keyword kind for `literal`, or `Identifier` when it is not reserved.
pub fn lookup_identifier(literal: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(literal)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Integer,

    Assign,    // =
    Comma,     // ,
    Semicolon, // ;

    LParen,
    RParen,
    LBrace,
    RBrace,

    Plus,
    Minus,
    Multiplication,
    Division,
    Negation, // !

    Lt,
    Lte,
    Gt,
    Gte,
    Eq,  // ==
    Dif, // !=

    // Reserved
    Function,
    Let,
    If,
    Else,
    Return,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type: {}, Literal: {}", self.kind, self.literal)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
