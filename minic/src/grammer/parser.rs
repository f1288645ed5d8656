use super::ast::{BinaryOp, Expr, Program, Stmt};
use super::parsercore::Parser;
use super::token::{Token, TokenKind::*};
use crate::error::{Error, TokenInfo};
use crate::{check, expect, optional, repeat};

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    /// Parse the whole token stream. Fails on the first unexpected token,
    /// including anything left over after the closing brace of `main`.
    pub fn parse(mut self) -> Result<Program, Error> {
        let program = self.parse_program()?;
        match self.next() {
            Some(token) => Err(Error::UnexpectedToken(TokenInfo::from(&token))),
            None => Ok(program),
        }
    }
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    /// program = "int" "main" "(" ")" "{" { stmt } "}"
    fn parse_program(&mut self) -> Result<Program, Error> {
        expect!(self, KwInt)?;
        expect!(self, KwMain)?;
        expect!(self, LParen)?;
        expect!(self, RParen)?;
        expect!(self, LCurly)?;
        let stmts = repeat!(self, self.parse_stmt(), RCurly);
        expect!(self, RCurly)?;
        Ok(Program(stmts))
    }

    /// stmt = decl-stmt | assign-stmt | print-stmt | if-stmt | while-stmt | block
    fn parse_stmt(&mut self) -> Result<Stmt, Error> {
        let token = self.peek().cloned().ok_or(Error::UnexpectedEOF)?;
        match &token.kind {
            // Block statement: "{" { stmt } "}"
            LCurly => {
                expect!(self, LCurly)?;
                let stmts = repeat!(self, self.parse_stmt(), RCurly);
                expect!(self, RCurly)?;
                Ok(Stmt::Block(stmts))
            }

            // Declaration: "int" ident [ "=" expr ] ";"
            KwInt => {
                expect!(self, KwInt)?;
                let name = self.parse_ident()?;
                let init = optional!(self, Equal, self.parse_expr()?);
                expect!(self, Semicolon)?;
                Ok(Stmt::Decl(name, init))
            }

            // Assignment: ident "=" expr ";"
            Ident(_) => {
                let name = self.parse_ident()?;
                expect!(self, Equal)?;
                let expr = self.parse_expr()?;
                expect!(self, Semicolon)?;
                Ok(Stmt::Assign(name, expr))
            }

            // Print statement: "print" "(" expr ")" ";"
            KwPrint => {
                expect!(self, KwPrint)?;
                expect!(self, LParen)?;
                let expr = self.parse_expr()?;
                expect!(self, RParen)?;
                expect!(self, Semicolon)?;
                Ok(Stmt::Print(expr))
            }

            // Conditional statement: "if" "(" expr ")" stmt [ "else" stmt ]
            KwIf => {
                expect!(self, KwIf)?;
                expect!(self, LParen)?;
                let cond = self.parse_expr()?;
                expect!(self, RParen)?;
                let tstmt = Box::new(self.parse_stmt()?);
                let fstmt = optional!(self, KwElse, Box::new(self.parse_stmt()?));
                Ok(Stmt::If(cond, tstmt, fstmt))
            }

            // Loop statement: "while" "(" expr ")" stmt
            KwWhile => {
                expect!(self, KwWhile)?;
                expect!(self, LParen)?;
                let cond = self.parse_expr()?;
                expect!(self, RParen)?;
                let body = Box::new(self.parse_stmt()?);
                Ok(Stmt::While(cond, body))
            }

            _ => Err(Error::UnexpectedToken(TokenInfo::from(&token))),
        }
    }

    /// expr = eq-expr
    fn parse_expr(&mut self) -> Result<Expr, Error> {
        self.parse_eq_expr()
    }

    /// eq-expr = relat-expr { ( "==" | "!=" ) relat-expr }
    fn parse_eq_expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_relat_expr()?;
        loop {
            let op = match self.peek().map(|token| &token.kind) {
                Some(EqualEqual) => BinaryOp::Eq,
                Some(ExclEqual) => BinaryOp::Ne,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.parse_relat_expr()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    /// relat-expr = add-expr { ( ">" | "<" | ">=" | "<=" ) add-expr }
    fn parse_relat_expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_add_expr()?;
        loop {
            let op = match self.peek().map(|token| &token.kind) {
                Some(RAngle) => BinaryOp::Gt,
                Some(LAngle) => BinaryOp::Lt,
                Some(RAngleEqual) => BinaryOp::Ge,
                Some(LAngleEqual) => BinaryOp::Le,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.parse_add_expr()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    /// add-expr = mul-expr { ( "+" | "-" ) mul-expr }
    fn parse_add_expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_mul_expr()?;
        loop {
            let op = match self.peek().map(|token| &token.kind) {
                Some(Plus) => BinaryOp::Add,
                Some(Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.parse_mul_expr()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    /// mul-expr = prim-expr { ( "*" | "/" ) prim-expr }
    fn parse_mul_expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_prim_expr()?;
        loop {
            let op = match self.peek().map(|token| &token.kind) {
                Some(Star) => BinaryOp::Mul,
                Some(Slash) => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.parse_prim_expr()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    /// prim-expr = num-lit | ident | "(" expr ")"
    fn parse_prim_expr(&mut self) -> Result<Expr, Error> {
        let token = self.next().ok_or(Error::UnexpectedEOF)?;
        match &token.kind {
            // Parenthesized expression: "(" expr ")"
            LParen => {
                let inner = self.parse_expr()?;
                expect!(self, RParen)?;
                Ok(inner)
            }

            // Identifier: ident
            Ident(name) => Ok(Expr::Ident(name.clone())),

            // Number literal: num-lit
            Number(val) => Ok(Expr::NumberLit(*val)),

            _ => Err(Error::UnexpectedToken(TokenInfo::from(&token))),
        }
    }

    /// ident = ( "A".."Z" | "a".."z" | "_" ) { "0".."9" | "A".."Z" | "a".."z" | "_" }
    fn parse_ident(&mut self) -> Result<String, Error> {
        let token = self.next().ok_or(Error::UnexpectedEOF)?;
        match &token.kind {
            Ident(name) => Ok(name.clone()),
            _ => Err(Error::UnexpectedToken(TokenInfo::from(&token))),
        }
    }
}
