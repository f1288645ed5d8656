pub mod asm;
pub mod fresh;
pub mod tac;
