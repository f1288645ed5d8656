use super::token::{Token, TokenKind};
use crate::error::{Error, TokenInfo};
use std::iter::Peekable;

pub struct Parser<'a, I: Iterator<Item = Token<'a>>> {
    tokens: Peekable<I>,
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens: tokens.peekable(),
        }
    }
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    /// Skip comments, the grammar never sees them
    fn skip(&mut self) {
        while self
            .tokens
            .next_if(|token| matches!(token.kind, TokenKind::Comment(_)))
            .is_some()
        {}
    }

    /// Peek : Watch next token without consuming it
    pub fn peek(&mut self) -> Option<&Token<'a>> {
        self.skip();
        self.tokens.peek()
    }

    /// Next : Consume next token and return it
    pub fn next(&mut self) -> Option<Token<'a>> {
        self.skip();
        self.tokens.next()
    }

    /// Peek and check next token is match with condition
    pub fn check_if<F: Fn(&Token) -> bool>(&mut self, cond: F) -> bool {
        self.peek().is_some_and(|token| cond(token))
    }

    /// Consume if next token is match with condition
    pub fn consume_if<F: Fn(&Token) -> bool>(&mut self, cond: F) -> Option<Token<'a>> {
        self.skip();
        self.tokens.next_if(|token| cond(token))
    }

    /// Next token must be match with condition
    pub fn expect_tobe<F: Fn(&Token) -> bool>(&mut self, cond: F) -> Result<Token<'a>, Error> {
        match self.next() {
            Some(token) if cond(&token) => Ok(token),
            Some(token) => Err(Error::UnexpectedToken(TokenInfo::from(&token))),
            None => Err(Error::UnexpectedEOF),
        }
    }
}

#[macro_export]
macro_rules! check {
    ($parser:expr, $kind:pat) => {
        $parser.check_if(|token| matches!(&token.kind, $kind))
    };
}

#[macro_export]
macro_rules! expect {
    ($parser:expr, $kind:pat) => {
        $parser.expect_tobe(|token| matches!(&token.kind, $kind))
    };
}

#[macro_export]
macro_rules! optional {
    ($parser:expr, $trigger:pat, $following:expr) => {
        if check!($parser, $trigger) {
            expect!($parser, $trigger)?;
            Some($following)
        } else {
            None
        }
    };
    ($parser:expr, $trigger:pat) => {
        $parser.consume_if(|token| matches!(&token.kind, $trigger))
    };
}

/// Parse `{ element } terminal`, leaving the terminal unconsumed
#[macro_export]
macro_rules! repeat {
    ($parser:expr, $elem:expr, $terminal:pat) => {{
        let mut items = Vec::new();
        while !check!($parser, $terminal) {
            items.push($elem?);
        }
        items
    }};
}
