use color_print::cprintln;
use minic::{grammer::ast::Program, tac::Tac, Asm, SymbolTable, TokenSummary};

pub fn heading(title: &str) {
    println!();
    cprintln!("<s>=== {} ===</>", title);
}

pub fn print_source(src: &str) {
    heading("Source Code");
    for (idx, line) in src.lines().enumerate() {
        cprintln!(" <blue>{:>4} |</> {}", idx + 1, line);
    }
}

pub fn print_summary(summary: &TokenSummary) {
    heading("Token List (summary)");
    for line in summary.lines() {
        println!("{}", line);
    }
}

pub fn print_program(program: &Program) {
    heading("Parsing -> AST (statements)");
    for (line, stmt) in program.lines() {
        cprintln!("<g>{:>4}</> {}", line, stmt);
    }
}

pub fn print_symbols(symbols: &SymbolTable) {
    heading("Symbol Table");
    if symbols.is_empty() {
        cprintln!("<s>(empty)</>");
    }
    for line in symbols.dump() {
        println!("{}", line);
    }
}

pub fn print_tac(tac: &[Tac]) {
    heading("Three Address Code (TAC)");
    for inst in tac {
        match inst {
            Tac::Label(label) => cprintln!("<m>{}</>:", label),
            inst => println!("    {}", inst),
        }
    }
}

pub fn print_asm(asm: &[Asm]) {
    heading("Assembly-like Code");
    for inst in asm {
        match inst {
            Asm::LABEL(_) => println!("{}", inst.cformat()),
            inst => println!("    {}", inst.cformat()),
        }
    }
}

pub fn print_saved(paths: &[String]) {
    println!();
    cprintln!("<g,s>Saved</>: {}", paths.join(", "));
}
