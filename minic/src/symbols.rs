use crate::{
    error::Error,
    grammer::ast::{Program, Stmt},
    tac::is_temp_name,
};
use indexmap::IndexMap;
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Ty {
    Int,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolEntry {
    pub name: String,
    pub ty: Ty,
    /// Last literal assigned, for reporting only. Never folded into code.
    pub value: Option<i64>,
    pub decls: Vec<usize>,
    pub uses: Vec<usize>,
}

/// Flat global namespace, in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(IndexMap<String, SymbolEntry>);

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, ty: Ty, line: usize) -> Result<(), Error> {
        if self.0.contains_key(name) {
            return Err(Error::DuplicateDeclaration(name.to_string(), line));
        }
        self.0.insert(
            name.to_string(),
            SymbolEntry {
                name: name.to_string(),
                ty,
                value: None,
                decls: vec![line],
                uses: Vec::new(),
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.0.get(name)
    }

    /// Record a write: replaces the value and appends `line` to the uses.
    pub fn update(&mut self, name: &str, value: Option<i64>, line: usize) -> Result<(), Error> {
        let entry = self.entry_mut(name, line)?;
        entry.value = value;
        entry.uses.push(line);
        Ok(())
    }

    /// Record a read: appends `line` to the uses.
    pub fn record_use(&mut self, name: &str, line: usize) -> Result<(), Error> {
        self.entry_mut(name, line)?.uses.push(line);
        Ok(())
    }

    fn entry_mut(&mut self, name: &str, line: usize) -> Result<&mut SymbolEntry, Error> {
        self.0
            .get_mut(name)
            .ok_or_else(|| Error::UndeclaredVariable(name.to_string(), line))
    }

    /// Insert every top-level declaration of `program`, keyed by the
    /// statement ordinal.
    pub fn declare_all(&mut self, program: &Program) -> Result<(), Error> {
        for (line, stmt) in program.lines() {
            if let Stmt::Decl(name, _) = stmt {
                if is_temp_name(name) {
                    return Err(Error::ReservedName(name.clone(), line));
                }
                self.insert(name, Ty::Int, line)?;
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.0.values()
    }

    /// `(index, 'name', 'type', value, [decl lines], [use lines])` per entry
    pub fn dump(&self) -> Vec<String> {
        self.entries()
            .enumerate()
            .map(|(idx, entry)| {
                let value = match entry.value {
                    Some(val) => val.to_string(),
                    None => "None".to_string(),
                };
                format!(
                    "({}, '{}', '{}', {}, {:?}, {:?})",
                    idx, entry.name, entry.ty, value, entry.decls, entry.uses
                )
            })
            .collect()
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }
}
