use crate::alu::Alu;

use color_print::cformat;
use std::fmt;

/// Accumulator/stack machine instruction.
///
/// `O` is the operand type (temporaries, variables, literals) and `L` the
/// label type, so the front end can plug in its own typed names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst<O, L> {
    LOAD(O),
    STORE(O),
    CALC(Alu),
    PRINT(O),
    LABEL(L),
    JMP(L),
    JZ(O, L),

    // Source line the lowering did not recognize, kept verbatim
    UNHANDLED(String),
}

impl<O, L> Inst<O, L> {
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Inst::UNHANDLED(_))
    }
}

impl<O: fmt::Display, L: fmt::Display> fmt::Display for Inst<O, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::LOAD(src) => write!(f, "LOAD {}", src),
            Inst::STORE(dst) => write!(f, "STORE {}", dst),
            Inst::CALC(alu) => write!(f, "{}", alu),
            Inst::PRINT(src) => write!(f, "PRINT {}", src),
            Inst::LABEL(label) => write!(f, "LABEL {}", label),
            Inst::JMP(label) => write!(f, "JMP {}", label),
            Inst::JZ(cond, label) => write!(f, "JZ {} {}", cond, label),
            Inst::UNHANDLED(raw) => write!(f, "# UNHANDLED {}", raw),
        }
    }
}

impl<O: fmt::Display, L: fmt::Display> Inst<O, L> {
    pub fn cformat(&self) -> String {
        macro_rules! op {
            ($name:expr, $args:expr) => {
                cformat!("<r>{:<6}</><b>{}</>", $name, $args)
            };
        }

        match self {
            Inst::LOAD(src) => op!("LOAD", src),
            Inst::STORE(dst) => op!("STORE", dst),
            Inst::CALC(alu) if alu.is_compare() => cformat!("<y>{}</>", alu),
            Inst::CALC(alu) => cformat!("<r>{}</>", alu),
            Inst::PRINT(src) => op!("PRINT", src),
            Inst::LABEL(label) => cformat!("<m>{}</>:", label),
            Inst::JMP(label) => op!("JMP", cformat!("<m>{}</>", label)),
            Inst::JZ(cond, label) => op!("JZ", cformat!("{} <m>{}</>", cond, label)),
            Inst::UNHANDLED(raw) => cformat!("<s># UNHANDLED</> {}", raw),
        }
    }
}
