use crate::{
    compile::fresh::Fresh,
    error::Error,
    grammer::ast::{BinaryOp, Expr, Program, Stmt},
    symbols::{SymbolTable, Ty},
    tac::{is_temp_name, Operand, Tac},
};
use itertools::chain;
use std::collections::HashSet;

/// AST to three-address code, one compilation at a time.
///
/// The table may already hold the top-level declarations (see
/// [`SymbolTable::declare_all`]); a name still has to be declared by the
/// program text before it is read or written.
pub struct TacCompiler<'a> {
    table: &'a mut SymbolTable,
    fresh: Fresh,
    declared: HashSet<String>,
}

impl<'a> TacCompiler<'a> {
    pub fn new(table: &'a mut SymbolTable) -> Self {
        Self {
            table,
            fresh: Fresh::new(),
            declared: HashSet::new(),
        }
    }

    pub fn fresh(&self) -> &Fresh {
        &self.fresh
    }

    pub fn compile_program(&mut self, program: &Program) -> Result<Vec<Tac>, Error> {
        self.fresh.reset();
        self.declared.clear();

        let mut code = Vec::new();
        for (line, stmt) in program.lines() {
            code.extend(self.compile_stmt(stmt, line)?);
        }
        Ok(code)
    }

    pub fn compile_stmt(&mut self, stmt: &Stmt, line: usize) -> Result<Vec<Tac>, Error> {
        match stmt {
            Stmt::Decl(name, init) => {
                if is_temp_name(name) {
                    return Err(Error::ReservedName(name.clone(), line));
                }
                if self.declared.contains(name) {
                    return Err(Error::DuplicateDeclaration(name.clone(), line));
                }
                let code = match init {
                    Some(expr) => {
                        let (code, result) = self.compile_expr(expr, line)?;
                        chain!(code, [Tac::Copy(Operand::Var(name.clone()), result)]).collect()
                    }
                    None => vec![Tac::Copy(Operand::Var(name.clone()), Operand::Lit(0))],
                };
                if self.table.lookup(name).is_none() {
                    self.table.insert(name, Ty::Int, line)?;
                }
                self.declared.insert(name.clone());
                Ok(code)
            }

            Stmt::Assign(name, expr) => {
                self.check_declared(name, line)?;
                if let Expr::Binary(BinaryOp::Div, _, rhs) = expr {
                    if let Expr::NumberLit(0) = **rhs {
                        return Err(Error::DivisionByZero(name.clone(), line));
                    }
                }
                let (code, result) = self.compile_expr(expr, line)?;
                let value = match expr {
                    Expr::NumberLit(val) => Some(*val),
                    _ => None,
                };
                self.table.update(name, value, line)?;
                Ok(chain!(code, [Tac::Copy(Operand::Var(name.clone()), result)]).collect())
            }

            Stmt::Print(expr) => {
                let (code, result) = self.compile_expr(expr, line)?;
                Ok(chain!(code, [Tac::Print(result)]).collect())
            }

            Stmt::Block(stmts) => {
                let mut code = Vec::new();
                for stmt in stmts {
                    code.extend(self.compile_stmt(stmt, line)?);
                }
                Ok(code)
            }

            Stmt::If(cond, tstmt, fstmt) => {
                let (cond_code, cond) = self.compile_expr(cond, line)?;
                let l_else = self.fresh.label();
                let l_end = self.fresh.label();

                let then_code = self.compile_stmt(tstmt, line)?;
                let else_code = match fstmt {
                    Some(fstmt) => self.compile_stmt(fstmt, line)?,
                    None => Vec::new(),
                };

                Ok(chain!(
                    cond_code,
                    [Tac::IfFalse(cond, l_else.clone())],
                    then_code,
                    [Tac::Goto(l_end.clone()), Tac::Label(l_else)],
                    else_code,
                    [Tac::Label(l_end)]
                )
                .collect())
            }

            Stmt::While(cond, body) => {
                let l_start = self.fresh.label();
                let l_end = self.fresh.label();

                let (cond_code, cond) = self.compile_expr(cond, line)?;
                let body_code = self.compile_stmt(body, line)?;

                Ok(chain!(
                    [Tac::Label(l_start.clone())],
                    cond_code,
                    [Tac::IfFalse(cond, l_end.clone())],
                    body_code,
                    [Tac::Goto(l_start), Tac::Label(l_end)]
                )
                .collect())
            }
        }
    }

    /// Code computing `expr` and the temporary holding its value.
    pub fn compile_expr(&mut self, expr: &Expr, line: usize) -> Result<(Vec<Tac>, Operand), Error> {
        match expr {
            Expr::NumberLit(val) => {
                let dst = self.fresh.temp();
                Ok((vec![Tac::Copy(dst.clone(), Operand::Lit(*val))], dst))
            }

            Expr::Ident(name) => {
                self.check_declared(name, line)?;
                self.table.record_use(name, line)?;
                let dst = self.fresh.temp();
                Ok((vec![Tac::Copy(dst.clone(), Operand::Var(name.clone()))], dst))
            }

            Expr::Binary(op, lhs, rhs) => {
                let (lhs_code, lhs) = self.compile_expr(lhs, line)?;
                let (rhs_code, rhs) = self.compile_expr(rhs, line)?;
                let dst = self.fresh.temp();
                let code = chain!(
                    lhs_code,
                    rhs_code,
                    [Tac::Binary(dst.clone(), lhs, *op, rhs)]
                )
                .collect();
                Ok((code, dst))
            }
        }
    }

    fn check_declared(&self, name: &str, line: usize) -> Result<(), Error> {
        if self.declared.contains(name) {
            Ok(())
        } else {
            Err(Error::UndeclaredVariable(name.to_string(), line))
        }
    }
}
