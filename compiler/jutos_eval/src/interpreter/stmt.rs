//! Statement execution.

use std::rc::Rc;

use jutos_ir::{Block, Expr, Stmt, StmtKind};
use jutos_stack::ensure_sufficient_stack;

use super::{Flow, Interpreter};
use crate::{Environment, EvalError, FunctionValue, Mutability, Value};

impl Interpreter {
    pub(crate) fn exec_stmt(&self, stmt: &Stmt, env: &Environment) -> Result<Flow, EvalError> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt, env))
    }

    fn exec_stmt_inner(&self, stmt: &Stmt, env: &Environment) -> Result<Flow, EvalError> {
        match &stmt.kind {
            StmtKind::VariableDeclaration {
                name,
                mutable,
                init,
            } => {
                let value = self.eval_expr(init, env)?;
                env.declare(name, value, *mutable)
                    .map_err(|e| e.at(stmt.span))?;
                Ok(Flow::Normal(Value::Null))
            }
            StmtKind::FunctionDeclaration(def) => {
                let name = def.name.as_deref().unwrap_or_default();
                let function = Value::Function(Rc::new(FunctionValue {
                    def: Rc::clone(def),
                    closure: env.clone(),
                }));
                env.declare(name, function, Mutability::Immutable)
                    .map_err(|e| e.at(stmt.span))?;
                Ok(Flow::Normal(Value::Null))
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(condition, env)?.is_truthy() {
                    self.exec_block(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch, env)
                } else {
                    Ok(Flow::Normal(Value::Null))
                }
            }
            StmtKind::While { condition, body } => {
                while self.eval_expr(condition, env)?.is_truthy() {
                    match self.exec_block(body, env)? {
                        Flow::Break => break,
                        Flow::Return(value) => return Ok(Flow::Return(value)),
                        Flow::Normal(_) | Flow::Continue => {}
                    }
                }
                Ok(Flow::Normal(Value::Null))
            }
            StmtKind::For {
                init,
                condition,
                update,
                body,
            } => self.exec_for(
                init.as_deref(),
                condition.as_ref(),
                update.as_ref(),
                body,
                env,
            ),
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            }
            StmtKind::Break => Ok(Flow::Break),
            StmtKind::Continue => Ok(Flow::Continue),
            StmtKind::Block(block) => self.exec_block(block, env),
            StmtKind::Expression(expr) => Ok(Flow::Normal(self.eval_expr(expr, env)?)),
        }
    }

    /// Run `block` in a fresh child scope of `env`.
    pub(crate) fn exec_block(&self, block: &Block, env: &Environment) -> Result<Flow, EvalError> {
        let scope = env.create_child();
        self.exec_stmts(&block.stmts, &scope)
    }

    /// Run `stmts` directly in `env`, stopping at the first non-normal flow.
    pub(crate) fn exec_stmts(&self, stmts: &[Stmt], env: &Environment) -> Result<Flow, EvalError> {
        let mut last = Value::Null;
        for stmt in stmts {
            match self.exec_stmt(stmt, env)? {
                Flow::Normal(value) => last = value,
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal(last))
    }

    /// `for (init; condition; update) body`
    ///
    /// `init` runs once in a loop scope. Every iteration then runs in its own
    /// copy of that scope, so closures created by the body capture the
    /// bindings of their iteration; the copy is taken before `update` runs.
    fn exec_for(
        &self,
        init: Option<&Stmt>,
        condition: Option<&Expr>,
        update: Option<&Expr>,
        body: &Block,
        env: &Environment,
    ) -> Result<Flow, EvalError> {
        let loop_scope = env.create_child();
        if let Some(init) = init {
            self.exec_stmt(init, &loop_scope)?;
        }

        let mut iteration = loop_scope.copy_for_iteration();
        loop {
            if let Some(condition) = condition {
                if !self.eval_expr(condition, &iteration)?.is_truthy() {
                    break;
                }
            }
            match self.exec_block(body, &iteration)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal(_) | Flow::Continue => {}
            }
            iteration = iteration.copy_for_iteration();
            if let Some(update) = update {
                self.eval_expr(update, &iteration)?;
            }
        }
        Ok(Flow::Normal(Value::Null))
    }
}
