use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::rc::Rc;
use std::result::Result;

use thiserror::Error;
use tracing::trace;

use super::values::RuntimeVal;


// Messages end up in the program output, the name is only kept for logs
#[derive(Error, Debug, PartialEq)]
pub enum EnvError {
    #[error("unbound identifier")]
    UndeclaredVar(String),

    #[error("unbound identifier")]
    AssignToUndeclared(String),
}

#[derive(Default)]
struct Scope {
    parent: Option<Env>,
    vars: HashMap<String, RuntimeVal>,
}

// Handle on a scope. Cloning it shares the scope: blocks, calls and closures
// keep their parent chain alive for as long as they need it
#[derive(Clone, Default)]
pub struct Env {
    scope: Rc<RefCell<Scope>>,
}

impl Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = self.scope.borrow();
        let mut names = scope.vars.keys().map(String::as_str).collect::<Vec<&str>>();
        names.sort_unstable();

        f.debug_struct("Env")
            .field("vars", &names)
            .field("parent", &scope.parent)
            .finish()
    }
}

impl Env {
    // Option allow to not have a parent (the global env)
    pub fn new(parent: Option<&Env>) -> Self {
        Self {
            scope: Rc::new(RefCell::new(Scope {
                parent: parent.cloned(),
                vars: HashMap::new(),
            })),
        }
    }

    pub fn ptr_eq(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }

    // Declaring twice in the same scope replaces the previous value
    pub fn declare_var(&self, var: String, value: RuntimeVal) {
        trace!(name = %var, value = ?value, "declare");
        self.scope.borrow_mut().vars.insert(var, value);
    }

    // Fetch the environment in which is declared the variable and return its value
    pub fn lookup_var(&self, var: &str) -> Result<RuntimeVal, EnvError> {
        let env = self.resolve(var)?;
        let value = env.scope.borrow().vars.get(var).cloned();

        value.ok_or_else(|| EnvError::UndeclaredVar(var.to_string()))
    }

    // Assign a new value to an existing var, in the closest scope declaring it.
    // Never creates a binding
    pub fn assign_var(&self, var: &str, value: RuntimeVal) -> Result<(), EnvError> {
        let env = self
            .resolve(var)
            .map_err(|_| EnvError::AssignToUndeclared(var.to_string()))?;

        trace!(name = %var, value = ?value, "assign");
        env.scope.borrow_mut().vars.insert(var.to_string(), value);

        Ok(())
    }

    // Recursivly check the parent environment to find variable declaration
    fn resolve(&self, name: &str) -> Result<Env, EnvError> {
        let scope = self.scope.borrow();

        match scope.vars.contains_key(name) {
            true => Ok(self.clone()),
            false => match &scope.parent {
                Some(env) => env.resolve(name),
                None => Err(EnvError::UndeclaredVar(name.to_string())),
            },
        }
    }
}
