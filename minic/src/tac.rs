use crate::{error::Error, grammer::ast::BinaryOp};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Temp(usize), // "t" num
    Var(String), // ident
    Lit(i64),    // num-lit
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(pub String);

/// Three-address code. Every instruction carries at most one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tac {
    Copy(Operand, Operand),                      // dst "=" src
    Binary(Operand, Operand, BinaryOp, Operand), // dst "=" src op src
    Print(Operand),                              // "print" src
    Label(Label),                                // "label" label
    Goto(Label),                                 // "goto" label
    IfFalse(Operand, Label),                     // "ifFalse" src "goto" label
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Temp(idx) => write!(f, "t{}", idx),
            Operand::Var(name) => write!(f, "{}", name),
            Operand::Lit(val) => write!(f, "{}", val),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Tac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tac::Copy(dst, src) => write!(f, "{} = {}", dst, src),
            Tac::Binary(dst, lhs, op, rhs) => write!(f, "{} = {} {} {}", dst, lhs, op, rhs),
            Tac::Print(src) => write!(f, "print {}", src),
            Tac::Label(label) => write!(f, "label {}", label),
            Tac::Goto(label) => write!(f, "goto {}", label),
            Tac::IfFalse(cond, label) => write!(f, "ifFalse {} goto {}", cond, label),
        }
    }
}

// ----------------------------------------------------------------------------
// Reading the text encoding back
// ----------------------------------------------------------------------------

impl FromStr for Operand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(val) = s.parse::<i64>() {
            return Ok(Operand::Lit(val));
        }
        let mut chars = s.chars();
        match chars.next() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {}
            _ => return Err(Error::UnknownNode(s.to_string())),
        }
        if !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(Error::UnknownNode(s.to_string()));
        }
        match s.strip_prefix('t').map(str::parse::<usize>) {
            Some(Ok(idx)) if is_temp_name(s) => Ok(Operand::Temp(idx)),
            _ => Ok(Operand::Var(s.to_string())),
        }
    }
}

/// `t` followed by digits: the spelling of a temporary
pub fn is_temp_name(name: &str) -> bool {
    name.strip_prefix('t')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl Operand {
    /// Destination of an assignment: anything but a literal
    fn place(s: &str) -> Result<Self, Error> {
        match s.parse::<Operand>()? {
            Operand::Lit(_) => Err(Error::UnknownNode(s.to_string())),
            place => Ok(place),
        }
    }
}

impl FromStr for Tac {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["print", src] => Ok(Tac::Print(src.parse()?)),
            ["label", name] => Ok(Tac::Label(Label(name.to_string()))),
            ["goto", name] => Ok(Tac::Goto(Label(name.to_string()))),
            ["ifFalse", cond, "goto", name] => {
                Ok(Tac::IfFalse(cond.parse()?, Label(name.to_string())))
            }
            [dst, "=", src] => Ok(Tac::Copy(Operand::place(dst)?, src.parse()?)),
            [dst, "=", lhs, op, rhs] => {
                let op = BinaryOp::from_symbol(op)
                    .ok_or_else(|| Error::UnknownNode(line.to_string()))?;
                Ok(Tac::Binary(Operand::place(dst)?, lhs.parse()?, op, rhs.parse()?))
            }
            _ => Err(Error::UnknownNode(line.to_string())),
        }
    }
}
