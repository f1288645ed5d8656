use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Program(pub Vec<Stmt>); // "int" "main" "(" ")" "{" { stmt } "}"

impl Program {
    /// Top-level statements paired with their 1-based ordinal, which serves
    /// as the line number recorded in the symbol table.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &Stmt)> {
        self.0.iter().enumerate().map(|(idx, stmt)| (idx + 1, stmt))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Decl(String, Option<Expr>),             // "int" ident [ "=" expr ] ";"
    Assign(String, Expr),                   // ident "=" expr ";"
    Print(Expr),                            // "print" "(" expr ")" ";"
    Block(Vec<Stmt>),                       // "{" { stmt } "}"
    If(Expr, Box<Stmt>, Option<Box<Stmt>>), // "if" "(" expr ")" stmt [ "else" stmt ]
    While(Expr, Box<Stmt>),                 // "while" "(" expr ")" stmt
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryOp, Box<Expr>, Box<Expr>), // expr (binop) expr
    Ident(String),                          // ident
    NumberLit(i64),                         // num-lit
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add, // "+"
    Sub, // "-"
    Mul, // "*"
    Div, // "/"
    Eq,  // "=="
    Ne,  // "!="
    Gt,  // ">"
    Lt,  // "<"
    Ge,  // ">="
    Le,  // "<="
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::Ge => ">=",
            BinaryOp::Le => "<=",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "==" => Some(BinaryOp::Eq),
            "!=" => Some(BinaryOp::Ne),
            ">" => Some(BinaryOp::Gt),
            "<" => Some(BinaryOp::Lt),
            ">=" => Some(BinaryOp::Ge),
            "<=" => Some(BinaryOp::Le),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::Ident(name) => write!(f, "{}", name),
            Expr::NumberLit(val) => write!(f, "{}", val),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Decl(name, Some(init)) => write!(f, "int {} = {};", name, init),
            Stmt::Decl(name, None) => write!(f, "int {};", name),
            Stmt::Assign(name, expr) => write!(f, "{} = {};", name, expr),
            Stmt::Print(expr) => write!(f, "print {};", expr),
            Stmt::Block(stmts) => {
                write!(f, "{{")?;
                for stmt in stmts {
                    write!(f, " {}", stmt)?;
                }
                write!(f, " }}")
            }
            Stmt::If(cond, tstmt, Some(fstmt)) => {
                write!(f, "if {} {} else {}", cond, tstmt, fstmt)
            }
            Stmt::If(cond, tstmt, None) => write!(f, "if {} {}", cond, tstmt),
            Stmt::While(cond, body) => write!(f, "while {} {}", cond, body),
        }
    }
}
