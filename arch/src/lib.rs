pub mod alu;
pub mod inst;
