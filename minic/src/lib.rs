mod compile;
mod error;
pub mod grammer;
mod symbols;
pub mod tac;

pub use compile::asm::{alu, lower, lower_text, Asm};
pub use compile::fresh::Fresh;
pub use compile::tac::TacCompiler;
pub use error::{Error, Location, TokenInfo};
pub use grammer::lexer::{Lexer, LineLexer};
pub use grammer::parsercore::Parser;
pub use grammer::summary::{Category, TokenSummary};
pub use symbols::{SymbolEntry, SymbolTable, Ty};

use grammer::{ast::Program, token::Token};
use tac::Tac;

/// Every in-memory artifact of one compilation
#[derive(Debug, Clone)]
pub struct Compilation<'a> {
    pub tokens: Vec<Token<'a>>,
    pub summary: TokenSummary,
    pub program: Program,
    pub symbols: SymbolTable,
    pub tac: Vec<Tac>,
    pub asm: Vec<Asm>,
}

/// Run the whole pipeline over `src`. `file` is only used in positions.
pub fn compile<'a>(file: &'a str, src: &'a str) -> Result<Compilation<'a>, Error> {
    let tokens = Lexer::new(file, src).parse()?;
    let summary = TokenSummary::collect(&tokens);
    let program = Parser::new(tokens.iter().cloned()).parse()?;

    let mut symbols = SymbolTable::new();
    symbols.declare_all(&program)?;
    let tac = TacCompiler::new(&mut symbols).compile_program(&program)?;
    let asm = lower(&tac);

    Ok(Compilation {
        tokens,
        summary,
        program,
        symbols,
        tac,
        asm,
    })
}
