mod call;
mod expr;
mod interp_errors;
mod stmt;
#[cfg(test)]
mod fixtures;

pub use interp_errors::{ErrorKind, InterpreterError};

use tracing::debug;

use super::{environment::Env, values::{descriptor, RuntimeVal}};
use crate::frontend::ast::{Program, Statement};
use stmt::Completion;


pub struct Interpreter {}

impl Interpreter {
    // Each run gets its own global environment, nothing is kept between runs
    pub fn execute_program(&self, program: &Program) -> Result<RuntimeVal, InterpreterError> {
        let env = Env::new(None);

        self.execute_program_in_env(program, &env)
    }

    // Result is the value of a return reached at top level, or of the last
    // statement if it is an expression. Anything else gives void.
    // The program runs directly in the given env, which may be any scope
    pub fn execute_program_in_env(
        &self,
        program: &Program,
        env: &Env,
    ) -> Result<RuntimeVal, InterpreterError> {
        let Some((last, leading)) = program.body.split_last() else {
            return Ok(RuntimeVal::Void);
        };

        if let Completion::Return(val) = self.execute_block(leading, env)? {
            debug!(result = ?val, "program returned");
            return Ok(val);
        }

        let result = match last {
            Statement::ExpressionStatement { expression } => self.evaluate(expression, env)?,
            stmt => match self.execute_block(std::slice::from_ref(stmt), env)? {
                Completion::Return(val) => val,
                Completion::Normal => RuntimeVal::Void,
            },
        };

        debug!(result = ?result, "program evaluated");

        Ok(result)
    }

    // Descriptor of the program result, the single line given back to the caller
    pub fn run(&self, program: &Program) -> String {
        descriptor::encode(&self.execute_program(program))
    }
}
