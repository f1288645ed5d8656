use super::token::{Token, TokenKind};
use indexmap::IndexMap;
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Category {
    Keyword,
    Identifier,
    Constant,
    Operator,
    Punctuation,
    Comment,
}

impl Category {
    pub fn of(kind: &TokenKind) -> Self {
        use TokenKind::*;
        match kind {
            KwInt | KwPrint | KwIf | KwElse | KwWhile | KwMain => Category::Keyword,
            Ident(_) => Category::Identifier,
            Number(_) => Category::Constant,
            EqualEqual | ExclEqual | RAngleEqual | LAngleEqual | Equal | Plus | Minus | Star
            | Slash | LAngle | RAngle => Category::Operator,
            Semicolon | Comma | LParen | RParen | LCurly | RCurly => Category::Punctuation,
            Comment(_) => Category::Comment,
        }
    }
}

/// Lexemes grouped by category, in source order. Every category is present.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSummary(pub IndexMap<Category, Vec<String>>);

impl TokenSummary {
    pub fn collect(tokens: &[Token]) -> Self {
        let mut groups: IndexMap<Category, Vec<String>> =
            Category::iter().map(|cat| (cat, Vec::new())).collect();
        for token in tokens {
            groups[&Category::of(&token.kind)].push(token.text.to_string());
        }
        TokenSummary(groups)
    }

    pub fn get(&self, cat: Category) -> &[String] {
        self.0.get(&cat).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Keyword (2): int, main` per category, `-` for an empty one
    pub fn lines(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(cat, lexemes)| {
                let joined = if lexemes.is_empty() {
                    "-".to_string()
                } else {
                    lexemes.join(", ")
                };
                format!("{} ({}): {}", cat, lexemes.len(), joined)
            })
            .collect()
    }
}
