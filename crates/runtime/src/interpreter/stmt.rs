use tools::stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use super::{Interpreter, InterpreterError};
use crate::frontend::ast::{BlockStatement, Expression, ForInit, Statement, VariableDeclarator};
use crate::values::{Closure, Operand};
use crate::{environment::Env, values::RuntimeVal};


// How a block ended. Return carries the value up through loops and blocks
// until a function call or the program consumes it
#[derive(Debug, PartialEq)]
pub(super) enum Completion {
    Normal,
    Return(RuntimeVal),
}

impl Interpreter {
    pub(super) fn execute_block(&self, stmts: &[Statement], env: &Env) -> Result<Completion, InterpreterError> {
        ensure_sufficient_stack(|| self.execute_block_inner(stmts, env))
    }

    fn execute_block_inner(&self, stmts: &[Statement], env: &Env) -> Result<Completion, InterpreterError> {
        for stmt in stmts {
            if let Completion::Return(val) = self.resolve(stmt, env)? {
                return Ok(Completion::Return(val));
            }
        }

        Ok(Completion::Normal)
    }

    fn resolve(&self, stmt: &Statement, env: &Env) -> Result<Completion, InterpreterError> {
        match stmt {
            Statement::VariableDeclaration(decl) => {
                self.declare(&decl.declarations, env)?;

                Ok(Completion::Normal)
            }
            Statement::ExpressionStatement { expression } => {
                self.evaluate(expression, env)?;

                Ok(Completion::Normal)
            }
            Statement::ReturnStatement { argument } => {
                let val = match argument {
                    Some(expr) => self.evaluate(expr, env)?,
                    None => RuntimeVal::Void,
                };

                Ok(Completion::Return(val))
            }
            Statement::WhileStatement { test, body } => {
                let loop_env = Env::new(Some(env));

                self.execute_loop(Some(test), None, body, &loop_env)
            }
            Statement::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                // Loop variables live in their own scope, around the body one
                let loop_env = Env::new(Some(env));

                match init {
                    Some(ForInit::Declaration(decl)) => self.declare(&decl.declarations, &loop_env)?,
                    Some(ForInit::Expression(expr)) => {
                        self.evaluate(expr, &loop_env)?;
                    }
                    None => {}
                }

                self.execute_loop(test.as_ref(), update.as_ref(), body, &loop_env)
            }
        }
    }

    fn declare(&self, declarations: &[VariableDeclarator], env: &Env) -> Result<(), InterpreterError> {
        for decl in declarations {
            let value = match &decl.init {
                // Bound directly, no need to go through the evaluator
                Some(Expression::FunctionExpression(function)) => {
                    RuntimeVal::Closure(Closure::new(function.clone(), env.clone()))
                }
                Some(expr) => self.evaluate(expr, env)?,
                None => RuntimeVal::Void,
            };

            env.declare_var(decl.id.name.clone(), value);
        }

        Ok(())
    }

    fn execute_loop(
        &self,
        test: Option<&Expression>,
        update: Option<&Expression>,
        body: &BlockStatement,
        env: &Env,
    ) -> Result<Completion, InterpreterError> {
        let mut iterations: u64 = 0;

        loop {
            // No test means an infinite loop, only a return or an error ends it
            let keep_going = match test {
                Some(expr) => self.evaluate(expr, env)?.as_bool(Operand::LoopTest)?,
                None => true,
            };

            if !keep_going {
                break;
            }

            // Fresh scope for each iteration body
            let body_env = Env::new(Some(env));
            if let Completion::Return(val) = self.execute_block(&body.body, &body_env)? {
                debug!(iterations, "return from loop body");
                return Ok(Completion::Return(val));
            }

            if let Some(expr) = update {
                self.evaluate(expr, env)?;
            }

            iterations += 1;
            trace!(iterations, "loop iteration done");
        }

        debug!(iterations, "loop ended");

        Ok(Completion::Normal)
    }
}
