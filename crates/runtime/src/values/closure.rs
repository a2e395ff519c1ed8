use std::fmt::Debug;
use std::rc::Rc;

use crate::environment::Env;
use crate::frontend::ast::{BlockStatement, Function, Identifier};


// A function value: parameters and body of the function expression, plus the
// environment that was active where the expression was evaluated. The
// environment is shared, later assignments in it are seen by the closure
#[derive(Clone)]
pub struct Closure {
    function: Rc<Function>,
    env: Env,
}

impl Closure {
    pub fn new(function: Rc<Function>, env: Env) -> Self {
        Self { function, env }
    }

    pub fn params(&self) -> &[Identifier] {
        &self.function.params
    }

    pub fn arity(&self) -> usize {
        self.function.params.len()
    }

    pub fn body(&self) -> &BlockStatement {
        &self.function.body
    }

    pub fn env(&self) -> &Env {
        &self.env
    }
}

// Two closures are equal only if built from the same function node in the
// same environment
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.function, &other.function) && self.env.ptr_eq(&other.env)
    }
}

// The captured environment may hold this closure, it is never printed
impl Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .params()
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<&str>>();

        write!(f, "function({})", params.join(", "))
    }
}
