use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Handler invoked with the text a pattern matched at the cursor.
/// Returns `None` when the matched text produces no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Two-character operators must stay ahead of their one-character prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\n\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[\\p{L}_][\\p{L}0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dif, "!=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lte, "<=") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gte, ">=") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Negation, "!") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Multiplication, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Division, "/") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
    ];
}

/// On-demand tokenizer over an in-memory source string.
///
/// Each call to [`Lexer::next_token`] scans exactly one token starting at the
/// cursor. Scanning never fails: characters that start no known token come
/// back as `Illegal` tokens, and once the end of input is reached every
/// further call returns `EOF`.
pub struct Lexer {
    source: String,
    pos: usize,
    token_start: usize,
    file: Rc<String>,
    trace: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            token_start: 0,
            file: file_name,
            trace: false,
        }
    }

    /// Prints every produced token to stderr when enabled.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Position where the most recently returned token starts.
    pub fn get_position(&self) -> Position {
        Position::at(self.token_start, Rc::clone(&self.file))
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan();

        if self.trace {
            eprintln!("[lexer {}:{}] {}", self.file, self.token_start, token);
        }

        token
    }

    fn scan(&mut self) -> Token {
        'scan: loop {
            self.token_start = self.pos;

            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, "");
            }

            for pattern in PATTERNS.iter() {
                let matched = match pattern.regex.find(self.remainder()) {
                    Some(found) => found.as_str().to_string(),
                    None => continue,
                };

                match (pattern.handler)(self, &matched) {
                    Some(token) => return token,
                    None => continue 'scan,
                }
            }

            let illegal = self.at();
            self.advance_n(illegal.len_utf8());
            return MK_TOKEN!(TokenKind::Illegal, illegal.to_string());
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Integer, matched))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(lookup_identifier(matched), matched))
}

/// Drains a fresh lexer over `source`, returning every token up to and
/// including the first `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
