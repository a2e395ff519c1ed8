use tracing::debug;

use super::stmt::Completion;
use super::{Interpreter, InterpreterError};
use crate::values::Closure;
use crate::{environment::Env, values::RuntimeVal};

impl Interpreter {
    // Parameters get their own scope on top of the captured one, the body runs
    // in a child of it. Nothing declared here leaks into the captured scope
    #[tracing::instrument(level = "debug", skip_all, fields(arity = closure.arity()))]
    pub(super) fn invoke(&self, closure: &Closure, args: Vec<RuntimeVal>) -> Result<RuntimeVal, InterpreterError> {
        if closure.arity() != args.len() {
            return Err(InterpreterError::WrongArgNumberFnCall {
                expected: closure.arity(),
                found: args.len(),
            });
        }

        let param_env = Env::new(Some(closure.env()));
        for (param, arg) in closure.params().iter().zip(args) {
            param_env.declare_var(param.name.clone(), arg);
        }

        let body_env = Env::new(Some(&param_env));

        // A body without return gives void
        let res = match self.execute_block(&closure.body().body, &body_env)? {
            Completion::Return(val) => val,
            Completion::Normal => RuntimeVal::Void,
        };

        debug!(result = ?res, "call returned");

        Ok(res)
    }
}
