use tools::stack::ensure_sufficient_stack;
use tracing::trace;

use super::{Interpreter, InterpreterError};
use crate::frontend::ast::{Expression, LogicalOperator, UnaryOperator};
use crate::values::{Closure, Operand};
use crate::{environment::Env, values::RuntimeVal};

impl Interpreter {
    pub(super) fn evaluate(&self, expr: &Expression, env: &Env) -> Result<RuntimeVal, InterpreterError> {
        ensure_sufficient_stack(|| self.evaluate_inner(expr, env))
    }

    // Any error stops the evaluation of the remaining sub expressions
    fn evaluate_inner(&self, expr: &Expression, env: &Env) -> Result<RuntimeVal, InterpreterError> {
        match expr {
            Expression::Identifier(id) => Ok(env.lookup_var(&id.name)?),
            Expression::Literal { raw } => Ok(RuntimeVal::from_literal(raw)?),
            Expression::BinaryExpression {
                operator,
                left,
                right,
            } => {
                let lhs = self.evaluate(left, env)?;
                let rhs = self.evaluate(right, env)?;

                lhs.calculate(&rhs, *operator).map_err(|e| {
                    trace!(%operator, lhs = ?lhs, rhs = ?rhs, "binary operation failed");
                    InterpreterError::from(e)
                })
            }
            Expression::UnaryExpression { operator, argument } => {
                let arg = self.evaluate(argument, env)?;

                match operator {
                    UnaryOperator::Not => Ok(RuntimeVal::Bool(!arg.as_bool(Operand::Unary)?)),
                    UnaryOperator::Minus => {
                        Ok(RuntimeVal::Number(arg.as_number(Operand::Unary)?.wrapping_neg()))
                    }
                }
            }
            // Both sides are always evaluated, no short circuit
            Expression::LogicalExpression {
                operator,
                left,
                right,
            } => {
                let lhs = self.evaluate(left, env)?;
                let rhs = self.evaluate(right, env)?;

                let l = lhs.as_bool(Operand::Logical)?;
                let r = rhs.as_bool(Operand::Logical)?;

                let res = match operator {
                    LogicalOperator::And => l && r,
                    LogicalOperator::Or => l || r,
                };

                Ok(RuntimeVal::Bool(res))
            }
            Expression::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                let cond = self.evaluate(test, env)?.as_bool(Operand::Conditional)?;

                match cond {
                    true => self.evaluate(consequent, env),
                    false => self.evaluate(alternate, env),
                }
            }
            Expression::FunctionExpression(function) => {
                Ok(RuntimeVal::Closure(Closure::new(function.clone(), env.clone())))
            }
            Expression::CallExpression { callee, arguments } => {
                // Arguments first, then the function
                let args = self.evaluate_fn_args_value(arguments, env)?;

                // Named callee is a lookup, anything else (immediate call, function
                // returned by a call, ...) is evaluated
                match self.evaluate(callee, env)? {
                    RuntimeVal::Closure(closure) => self.invoke(&closure, args),
                    other => {
                        trace!(callee = callee.kind_name(), value = ?other, "call on non function");
                        Err(InterpreterError::NonFunctionCall(other.get_type().to_string()))
                    }
                }
            }
            Expression::AssignmentExpression {
                operator,
                left,
                right,
            } => {
                // Target has to exist before anything is evaluated
                let current = env.lookup_var(&left.name)?;
                let value = self.evaluate(right, env)?;

                let value = match operator.binary_operator() {
                    Some(op) => current.calculate(&value, op)?,
                    None => value,
                };

                env.assign_var(&left.name, value)?;

                Ok(RuntimeVal::Void)
            }
        }
    }

    fn evaluate_fn_args_value(&self, args: &[Expression], env: &Env) -> Result<Vec<RuntimeVal>, InterpreterError> {
        args.iter().map(|arg| self.evaluate(arg, env)).collect()
    }
}
