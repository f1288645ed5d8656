use super::token::{Pos, Token, TokenKind};
use crate::error::Error;
use std::iter::Peekable;
use std::str::CharIndices;

pub struct Lexer<'a> {
    file: &'a str,
    code: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(file: &'a str, code: &'a str) -> Self {
        Self { file, code }
    }

    pub fn parse(self) -> Result<Vec<Token<'a>>, Error> {
        let mut tokens = Vec::new();
        for (idx, line) in self.code.lines().enumerate() {
            let lexer = LineLexer::new(line, self.file, idx + 1);
            tokens.extend(lexer.parse()?);
        }
        Ok(tokens)
    }
}

pub struct LineLexer<'a> {
    line: &'a str,
    iter: Peekable<CharIndices<'a>>,
    file: &'a str,
    row: usize,
}

impl<'a> LineLexer<'a> {
    pub fn new(line: &'a str, file: &'a str, row: usize) -> Self {
        Self {
            line,
            iter: line.char_indices().peekable(),
            file,
            row,
        }
    }
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    fn peek_nth(&self, n: usize) -> Option<(usize, char)> {
        self.iter.clone().nth(n)
    }

    fn consume(&mut self) -> Option<(usize, char)> {
        self.iter.next()
    }

    /// Byte offset of the next unconsumed character
    fn offset(&mut self) -> usize {
        match self.iter.peek() {
            Some(&(idx, _)) => idx,
            None => self.line.len(),
        }
    }

    fn pos(&self, idx: usize) -> Pos<'a> {
        Pos {
            file: self.file,
            line: self.row,
            col: self.line[..idx].chars().count() + 1,
        }
    }
}

// ----------------------------------------------------------------------------
// Scanner
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    pub fn parse(mut self) -> Result<Vec<Token<'a>>, Error> {
        let line = self.line;
        let mut tokens = Vec::new();
        while let Some((idx, ch0)) = self.peek_nth(0) {
            // 0. Skip whitespaces
            if matches!(ch0, ' ' | '\t' | '\r' | '\n') {
                self.consume();
                continue;
            }

            let pos = self.pos(idx);

            // 1. Comment runs to the end of the line
            if ch0 == '/' && matches!(self.peek_nth(1), Some((_, '/'))) {
                let text = &line[idx..];
                tokens.push(Token::new(TokenKind::Comment(text.to_string()), text, pos));
                break;
            }

            // 2. Double character token
            if let Some((_, ch1)) = self.peek_nth(1) {
                if let Some(kind) = double_char_token(ch0, ch1) {
                    self.consume(); // consume first char
                    self.consume(); // consume second char
                    let end = self.offset();
                    tokens.push(Token::new(kind, &line[idx..end], pos));
                    continue;
                }
            }

            // 3. Single character token
            if let Some(kind) = single_char_token(ch0) {
                self.consume();
                let end = self.offset();
                tokens.push(Token::new(kind, &line[idx..end], pos));
                continue;
            }

            // 4. Number literal
            if ch0.is_ascii_digit() {
                let (kind, end) = self.parse_number(&pos)?;
                tokens.push(Token::new(kind, &line[idx..end], pos));
                continue;
            }

            // 5. Identifier or keyword
            if ch0.is_ascii_alphabetic() || ch0 == '_' {
                let (kind, end) = self.parse_word();
                tokens.push(Token::new(kind, &line[idx..end], pos));
                continue;
            }

            return Err(Error::UnrecognizedChar(ch0, (&pos).into()));
        }
        Ok(tokens)
    }

    fn parse_word(&mut self) -> (TokenKind, usize) {
        let start = self.offset();
        while self
            .iter
            .next_if(|(_, ch)| matches!(ch, '_' | '0'..='9' | 'a'..='z' | 'A'..='Z'))
            .is_some()
        {}
        let end = self.offset();
        let lexeme = &self.line[start..end];
        let kind = match keyword(lexeme) {
            Some(kind) => kind,
            None => TokenKind::Ident(lexeme.to_string()),
        };
        (kind, end)
    }

    fn parse_number(&mut self, pos: &Pos<'a>) -> Result<(TokenKind, usize), Error> {
        let start = self.offset();
        while self.iter.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}
        let end = self.offset();
        let lexeme = &self.line[start..end];
        match lexeme.parse::<i64>() {
            Ok(num) => Ok((TokenKind::Number(num), end)),
            Err(_) => Err(Error::LiteralOutOfRange(lexeme.to_string(), pos.into())),
        }
    }
}

fn double_char_token(ch0: char, ch1: char) -> Option<TokenKind> {
    match (ch0, ch1) {
        ('=', '=') => Some(TokenKind::EqualEqual),
        ('!', '=') => Some(TokenKind::ExclEqual),
        ('<', '=') => Some(TokenKind::LAngleEqual),
        ('>', '=') => Some(TokenKind::RAngleEqual),
        _ => None,
    }
}

fn single_char_token(ch: char) -> Option<TokenKind> {
    match ch {
        '=' => Some(TokenKind::Equal),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        '<' => Some(TokenKind::LAngle),
        '>' => Some(TokenKind::RAngle),
        ';' => Some(TokenKind::Semicolon),
        ',' => Some(TokenKind::Comma),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '{' => Some(TokenKind::LCurly),
        '}' => Some(TokenKind::RCurly),
        _ => None,
    }
}

fn keyword(s: &str) -> Option<TokenKind> {
    match s {
        "int" => Some(TokenKind::KwInt),
        "print" => Some(TokenKind::KwPrint),
        "if" => Some(TokenKind::KwIf),
        "else" => Some(TokenKind::KwElse),
        "while" => Some(TokenKind::KwWhile),
        "main" => Some(TokenKind::KwMain),
        _ => None,
    }
}
