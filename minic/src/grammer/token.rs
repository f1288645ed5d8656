#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub pos: Pos<'a>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, pos: Pos<'a>) -> Self {
        Token { kind, text, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Double character tokens
    EqualEqual,  // '=='
    ExclEqual,   // '!='
    RAngleEqual, // '>='
    LAngleEqual, // '<='

    // Single character tokens
    Equal,     // '='
    Plus,      // '+'
    Minus,     // '-'
    Star,      // '*'
    Slash,     // '/'
    LAngle,    // '<'
    RAngle,    // '>'
    Semicolon, // ';'
    Comma,     // ','
    LParen,    // '('
    RParen,    // ')'
    LCurly,    // '{'
    RCurly,    // '}'

    // Keywords
    KwInt,   // "int"
    KwPrint, // "print"
    KwIf,    // "if"
    KwElse,  // "else"
    KwWhile, // "while"
    KwMain,  // "main"

    // Identifier
    Ident(String),

    // Literals
    Number(i64),

    // Special
    Comment(String),
}

/// 1-based line and column of the first character of a token.
#[derive(Debug, Clone, PartialEq)]
pub struct Pos<'a> {
    pub file: &'a str,
    pub line: usize,
    pub col: usize,
}
