use crate::grammer::token::{Pos, Token, TokenKind};
use std::fmt;
use thiserror::Error;

// Source position without lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

impl<'a> From<&Pos<'a>> for Location {
    fn from(pos: &Pos<'a>) -> Self {
        Location {
            file: pos.file.to_string(),
            line: pos.line,
            col: pos.col,
        }
    }
}

// Token information without lifetime
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub kind: TokenKind,
    pub text: String,
    pub at: Location,
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` at {}", self.text, self.at)
    }
}

impl<'a> From<&Token<'a>> for TokenInfo {
    fn from(token: &Token<'a>) -> Self {
        TokenInfo {
            kind: token.kind.clone(),
            text: token.text.to_string(),
            at: (&token.pos).into(),
        }
    }
}

// Unified error type for minic
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Lex errors
    #[error("Unrecognized character `{0}` at {1}")]
    UnrecognizedChar(char, Location),

    #[error("Integer literal out of range: `{0}` at {1}")]
    LiteralOutOfRange(String, Location),

    // Parse errors
    #[error("Unexpected end of input")]
    UnexpectedEOF,

    #[error("Unexpected token: {0}")]
    UnexpectedToken(TokenInfo),

    // Semantic errors
    #[error("Undeclared variable '{0}' (line {1})")]
    UndeclaredVariable(String, usize),

    #[error("Duplicate declaration of '{0}' (line {1})")]
    DuplicateDeclaration(String, usize),

    #[error("Division by zero in assignment to '{0}' (line {1})")]
    DivisionByZero(String, usize),

    #[error("'{0}' is reserved for compiler temporaries (line {1})")]
    ReservedName(String, usize),

    // Internal errors
    #[error("Unknown TAC shape: {0:?}")]
    UnknownNode(String),
}

impl Error {
    /// Where in the source the error was detected, if it is tied to a token
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::UnrecognizedChar(_, at) | Error::LiteralOutOfRange(_, at) => Some(at),
            Error::UnexpectedToken(info) => Some(&info.at),
            _ => None,
        }
    }

    pub fn is_lex_error(&self) -> bool {
        matches!(
            self,
            Error::UnrecognizedChar(..) | Error::LiteralOutOfRange(..)
        )
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::UnexpectedEOF | Error::UnexpectedToken(_))
    }
}
