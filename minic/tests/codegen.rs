use minic::grammer::ast::Program;
use minic::tac::Tac;
use minic::{Error, Lexer, Parser, SymbolTable, TacCompiler};

const DEFAULT_SOURCE: &str = "
int main(){
  int a = 5;
  int b = 3;
  if (a > b) { print(a - b); } else { print(b - a); }
  int i = 0;
  while (i < 3) { print(i); i = i + 1; }
}
";

fn program(code: &str) -> Program {
    let tokens = Lexer::new("test", code).parse().unwrap();
    Parser::new(tokens.into_iter()).parse().unwrap()
}

fn tac(code: &str) -> Result<Vec<String>, Error> {
    let program = program(code);
    let mut table = SymbolTable::new();
    table.declare_all(&program)?;
    let tac = TacCompiler::new(&mut table).compile_program(&program)?;
    for (idx, inst) in tac.iter().enumerate() {
        println!("{:>3}: {}", idx, inst);
    }
    Ok(tac.iter().map(ToString::to_string).collect())
}

fn main_body(body: &str) -> String {
    format!("int main() {{ {body} }}")
}

macro_rules! case {
    ($name:ident, $body:expr, $expect:expr) => {
        #[test]
        fn $name() {
            let expect: Vec<&str> = $expect;
            assert_eq!(tac(&main_body($body)).unwrap(), expect);
        }
    };
}

macro_rules! fails {
    ($name:ident, $body:expr, $pat:pat) => {
        #[test]
        fn $name() {
            let err = tac(&main_body($body)).unwrap_err();
            assert!(matches!(err, $pat), "{err}");
        }
    };
}

case!(decl_zero, "int a;", vec!["a = 0"]);
case!(decl_init, "int a = 7;", vec!["t0 = 7", "a = t0"]);
case!(
    assign_expr,
    "int a; a = a * 2 + 1;",
    vec![
        "a = 0",
        "t0 = a",
        "t1 = 2",
        "t2 = t0 * t1",
        "t3 = 1",
        "t4 = t2 + t3",
        "a = t4",
    ]
);
case!(
    left_then_right,
    "int a; int b; print((a - b) - (b - a));",
    vec![
        "a = 0",
        "b = 0",
        "t0 = a",
        "t1 = b",
        "t2 = t0 - t1",
        "t3 = b",
        "t4 = a",
        "t5 = t3 - t4",
        "t6 = t2 - t5",
        "print t6",
    ]
);
case!(
    if_without_else,
    "int a; if (a) print(a);",
    vec![
        "a = 0",
        "t0 = a",
        "ifFalse t0 goto L0",
        "t1 = a",
        "print t1",
        "goto L1",
        "label L0",
        "label L1",
    ]
);
case!(
    while_loop,
    "int i; while (i < 3) { print(i); i = i + 1; }",
    vec![
        "i = 0",
        "label L0",
        "t0 = i",
        "t1 = 3",
        "t2 = t0 < t1",
        "ifFalse t2 goto L1",
        "t3 = i",
        "print t3",
        "t4 = i",
        "t5 = 1",
        "t6 = t4 + t5",
        "i = t6",
        "goto L0",
        "label L1",
    ]
);
case!(
    nested_labels,
    "int a; while (a) { if (a) { a = 0; } }",
    vec![
        "a = 0",
        "label L0",
        "t0 = a",
        "ifFalse t0 goto L1",
        "t1 = a",
        "ifFalse t1 goto L2",
        "t2 = 0",
        "a = t2",
        "goto L3",
        "label L2",
        "label L3",
        "goto L0",
        "label L1",
    ]
);
case!(
    division_by_nonzero,
    "int a = 4; a = a / 2;",
    vec!["t0 = 4", "a = t0", "t1 = a", "t2 = 2", "t3 = t1 / t2", "a = t3"]
);
case!(
    nested_division_by_zero_not_inspected,
    "int a = 4; a = (a / 0) + 1;",
    vec![
        "t0 = 4",
        "a = t0",
        "t1 = a",
        "t2 = 0",
        "t3 = t1 / t2",
        "t4 = 1",
        "t5 = t3 + t4",
        "a = t5",
    ]
);

fails!(duplicate_top_level, "int a; int a;", Error::DuplicateDeclaration(_, 2));
fails!(duplicate_nested, "int a; { int a = 1; }", Error::DuplicateDeclaration(_, 2));
fails!(duplicate_in_blocks, "{ int b; } { int b; }", Error::DuplicateDeclaration(_, 2));
fails!(undeclared_read, "print(x);", Error::UndeclaredVariable(_, 1));
fails!(undeclared_write, "int a; y = 1;", Error::UndeclaredVariable(_, 2));
fails!(use_before_declaration, "a = 1; int a;", Error::UndeclaredVariable(_, 1));
fails!(self_initializer, "int a = a;", Error::UndeclaredVariable(_, 1));
fails!(
    temp_named_variable,
    "int t1 = 2; int x = 7; print(t1);",
    Error::ReservedName(_, 1)
);
fails!(temp_named_nested, "int a; { int t0; }", Error::ReservedName(_, 2));
case!(
    temp_like_names_allowed,
    "int tmp = 1; int t1x = tmp;",
    vec!["t0 = 1", "tmp = t0", "t1 = tmp", "t1x = t1"]
);
fails!(
    division_by_zero,
    "int a = 1; a = a / 0;",
    Error::DivisionByZero(_, 2)
);

#[test]
fn default_program() {
    let expect = vec![
        "t0 = 5",
        "a = t0",
        "t1 = 3",
        "b = t1",
        "t2 = a",
        "t3 = b",
        "t4 = t2 > t3",
        "ifFalse t4 goto L0",
        "t5 = a",
        "t6 = b",
        "t7 = t5 - t6",
        "print t7",
        "goto L1",
        "label L0",
        "t8 = b",
        "t9 = a",
        "t10 = t8 - t9",
        "print t10",
        "label L1",
        "t11 = 0",
        "i = t11",
        "label L2",
        "t12 = i",
        "t13 = 3",
        "t14 = t12 < t13",
        "ifFalse t14 goto L3",
        "t15 = i",
        "print t15",
        "t16 = i",
        "t17 = 1",
        "t18 = t16 + t17",
        "i = t18",
        "goto L2",
        "label L3",
    ];
    assert_eq!(tac(DEFAULT_SOURCE).unwrap(), expect);
}

#[test]
fn print_count_and_order() {
    let code = main_body("int a = 1; print(a); if (a) { print(2); } else print(3); print(a + 4);");
    let program = program(&code);
    let mut table = SymbolTable::new();
    let tac = TacCompiler::new(&mut table).compile_program(&program).unwrap();
    let printed: Vec<String> = tac
        .iter()
        .filter_map(|inst| match inst {
            Tac::Print(src) => Some(src.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(printed.len(), 4);
    let pos: Vec<usize> = printed
        .iter()
        .map(|src| tac.iter().position(|inst| inst.to_string() == format!("print {src}")).unwrap())
        .collect();
    assert!(pos.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn symbol_lines() {
    let program = program(DEFAULT_SOURCE);
    let mut table = SymbolTable::new();
    table.declare_all(&program).unwrap();
    TacCompiler::new(&mut table).compile_program(&program).unwrap();
    assert_eq!(
        table.dump(),
        vec![
            "(0, 'a', 'int', None, [1], [3, 3, 3])",
            "(1, 'b', 'int', None, [2], [3, 3, 3])",
            "(2, 'i', 'int', None, [4], [5, 5, 5, 5])",
        ]
    );
}

#[test]
fn nested_declaration_enters_table() {
    let program = program(&main_body("int a; if (a) { int b = 2; print(b); }"));
    let mut table = SymbolTable::new();
    table.declare_all(&program).unwrap();
    assert!(table.lookup("b").is_none());
    TacCompiler::new(&mut table).compile_program(&program).unwrap();
    let entry = table.lookup("b").unwrap();
    assert_eq!(entry.decls, vec![2]);
    assert_eq!(entry.uses, vec![2]);
}

#[test]
fn counters_reset_between_programs() {
    let first = program(&main_body("int a = 1; while (a) a = 0;"));
    let second = program(&main_body("int b = 2; if (b) print(b);"));

    let mut table = SymbolTable::new();
    let mut compiler = TacCompiler::new(&mut table);
    compiler.compile_program(&first).unwrap();
    let tac = compiler.compile_program(&second).unwrap();
    assert_eq!(tac[0].to_string(), "t0 = 2");
    assert_eq!(tac[3].to_string(), "ifFalse t1 goto L0");
}

#[test]
fn failed_division_leaves_no_code() {
    let program = program(&main_body("int a = 1; a = a / 0;"));
    let mut table = SymbolTable::new();
    table.declare_all(&program).unwrap();
    let mut compiler = TacCompiler::new(&mut table);
    let err = compiler.compile_program(&program).unwrap_err();
    assert!(matches!(err, Error::DivisionByZero(ref name, 2) if name == "a"));
    assert_eq!(compiler.fresh().temps(), 1);
    assert!(table.lookup("a").unwrap().uses.is_empty());
}
