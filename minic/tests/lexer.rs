use minic::grammer::token::TokenKind;
use minic::{Category, Error, Lexer, LineLexer, TokenSummary};

fn case(code: &str, expects: Vec<TokenKind>) {
    let tokens = LineLexer::new(code, "test", 1).parse().unwrap();

    println!(" {code}");
    for token in &tokens {
        print!("\r\x1b[{}C^", token.pos.col);
    }
    println!();
    for (idx, token) in tokens.iter().enumerate() {
        println!("{:>2}: {:?}", idx, token.kind);
    }

    assert_eq!(tokens.len(), expects.len());
    for (idx, expect) in expects.iter().enumerate() {
        assert_eq!(tokens[idx].kind, *expect);
    }
}

#[test]
fn tests() {
    use TokenKind::*;
    case(
        "int main() { int x = 42; print(x); } // done",
        vec![
            KwInt,
            KwMain,
            LParen,
            RParen,
            LCurly,
            KwInt,
            Ident(format!("x")),
            Equal,
            Number(42),
            Semicolon,
            KwPrint,
            LParen,
            Ident(format!("x")),
            RParen,
            Semicolon,
            RCurly,
            Comment(format!("// done")),
        ],
    );
    case(
        "while (i<=10) if (a!=b) x=x/2; else y=y*3-1;",
        vec![
            KwWhile,
            LParen,
            Ident(format!("i")),
            LAngleEqual,
            Number(10),
            RParen,
            KwIf,
            LParen,
            Ident(format!("a")),
            ExclEqual,
            Ident(format!("b")),
            RParen,
            Ident(format!("x")),
            Equal,
            Ident(format!("x")),
            Slash,
            Number(2),
            Semicolon,
            KwElse,
            Ident(format!("y")),
            Equal,
            Ident(format!("y")),
            Star,
            Number(3),
            Minus,
            Number(1),
            Semicolon,
        ],
    );
    case(
        "a==b >= c<d > e",
        vec![
            Ident(format!("a")),
            EqualEqual,
            Ident(format!("b")),
            RAngleEqual,
            Ident(format!("c")),
            LAngle,
            Ident(format!("d")),
            RAngle,
            Ident(format!("e")),
        ],
    );
    case(
        "integer _tmp1 mainly printx",
        vec![
            Ident(format!("integer")),
            Ident(format!("_tmp1")),
            Ident(format!("mainly")),
            Ident(format!("printx")),
        ],
    );
    case("   ", vec![]);
}

#[test]
fn positions() {
    let tokens = Lexer::new("pos.c", "int main() {\n  print(a);\n}").parse().unwrap();
    let at: Vec<(usize, usize)> = tokens.iter().map(|t| (t.pos.line, t.pos.col)).collect();
    assert_eq!(
        at,
        vec![
            (1, 1),
            (1, 5),
            (1, 9),
            (1, 10),
            (1, 12),
            (2, 3),
            (2, 8),
            (2, 9),
            (2, 10),
            (2, 11),
            (3, 1),
        ]
    );
    assert!(tokens.iter().all(|t| t.pos.file == "pos.c"));
}

#[test]
fn unrecognized_char() {
    let err = Lexer::new("bad.c", "int main() {\nint x = 3 @ 4;\n}").parse().unwrap_err();
    assert!(err.is_lex_error());
    match err {
        Error::UnrecognizedChar(ch, at) => {
            assert_eq!(ch, '@');
            assert_eq!((at.line, at.col), (2, 11));
            assert_eq!(at.to_string(), "bad.c:2:11");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lone_exclamation() {
    let err = LineLexer::new("!x", "test", 1).parse().unwrap_err();
    assert!(matches!(err, Error::UnrecognizedChar('!', _)));
}

#[test]
fn unicode_whitespace_rejected() {
    for ch in ['\u{a0}', '\u{2028}', '\u{3000}'] {
        let line = format!("int{ch}x;");
        let err = LineLexer::new(&line, "test", 1).parse().unwrap_err();
        match err {
            Error::UnrecognizedChar(found, at) => {
                assert_eq!(found, ch);
                assert_eq!(at.col, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    let tokens = LineLexer::new("\tint x;\r", "test", 1).parse().unwrap();
    assert_eq!(tokens.len(), 3);
}

#[test]
fn literal_out_of_range() {
    let err = LineLexer::new("x = 99999999999999999999;", "test", 1).parse().unwrap_err();
    assert!(matches!(err, Error::LiteralOutOfRange(ref text, _) if text == "99999999999999999999"));
}

#[test]
fn summary() {
    let tokens = Lexer::new("s.c", "int main() { int a = 10; print(a + 2); } // hi")
        .parse()
        .unwrap();
    let summary = TokenSummary::collect(&tokens);
    assert_eq!(
        summary.lines(),
        vec![
            "Keyword (4): int, main, int, print",
            "Identifier (2): a, a",
            "Constant (2): 10, 2",
            "Operator (2): =, +",
            "Punctuation (8): (, ), {, ;, (, ), ;, }",
            "Comment (1): // hi",
        ]
    );
    assert_eq!(summary.get(Category::Constant), ["10", "2"]);
}

#[test]
fn summary_empty_groups() {
    let tokens = Lexer::new("s.c", "int main() { }").parse().unwrap();
    let lines = TokenSummary::collect(&tokens).lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "Identifier (0): -");
    assert_eq!(lines[5], "Comment (0): -");
}
