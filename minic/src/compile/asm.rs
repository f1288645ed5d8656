use crate::{
    grammer::ast::BinaryOp,
    tac::{Label, Operand, Tac},
};
use arch::{alu::Alu, inst::Inst};

pub type Asm = Inst<Operand, Label>;

pub fn alu(op: BinaryOp) -> Alu {
    match op {
        BinaryOp::Add => Alu::ADD,
        BinaryOp::Sub => Alu::SUB,
        BinaryOp::Mul => Alu::MUL,
        BinaryOp::Div => Alu::DIV,
        BinaryOp::Eq => Alu::CMPEQ,
        BinaryOp::Ne => Alu::CMPNE,
        BinaryOp::Gt => Alu::CMPGT,
        BinaryOp::Lt => Alu::CMPLT,
        BinaryOp::Ge => Alu::CMPGE,
        BinaryOp::Le => Alu::CMPLE,
    }
}

pub fn lower(tac: &[Tac]) -> Vec<Asm> {
    tac.iter().flat_map(lower_inst).collect()
}

/// Lower TAC read back from its text form. Lines that are not TAC are kept
/// as `UNHANDLED` instead of aborting.
pub fn lower_text(text: &str) -> Vec<Asm> {
    let mut insts = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match line.parse::<Tac>() {
            Ok(tac) => insts.extend(lower_inst(&tac)),
            Err(_) => insts.push(Inst::UNHANDLED(line.to_string())),
        }
    }
    insts
}

fn lower_inst(tac: &Tac) -> Vec<Asm> {
    match tac {
        Tac::Binary(dst, lhs, op, rhs) => vec![
            Inst::LOAD(lhs.clone()),
            Inst::LOAD(rhs.clone()),
            Inst::CALC(alu(*op)),
            Inst::STORE(dst.clone()),
        ],
        Tac::Copy(dst, src) => vec![Inst::LOAD(src.clone()), Inst::STORE(dst.clone())],
        Tac::Print(src) => vec![Inst::PRINT(src.clone())],
        Tac::Label(label) => vec![Inst::LABEL(label.clone())],
        Tac::Goto(label) => vec![Inst::JMP(label.clone())],
        Tac::IfFalse(cond, label) => vec![Inst::JZ(cond.clone(), label.clone())],
    }
}
