use thiserror::Error;

use crate::environment::EnvError;
use crate::values::ValueError;

#[derive(Error, Debug, PartialEq)]
pub enum InterpreterError {
    // Functions
    #[error("not a function")]
    NonFunctionCall(String),

    #[error("arity mismatch")]
    WrongArgNumberFnCall { expected: usize, found: usize },

    #[error("{0}")]
    InterpFromEnv(#[from] EnvError),

    #[error("{0}")]
    InterpFromValue(#[from] ValueError),
}

// Failure families a program can end with. Lets library users and logs tell
// errors apart without matching on the message
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    UnboundIdentifier,
    NotAFunction,
    InvalidOperandType,
    DivideByZero,
    NotAWholeNumber,
    ArityMismatch,
}

impl InterpreterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpreterError::NonFunctionCall(_) => ErrorKind::NotAFunction,
            InterpreterError::WrongArgNumberFnCall { .. } => ErrorKind::ArityMismatch,
            InterpreterError::InterpFromEnv(_) => ErrorKind::UnboundIdentifier,
            InterpreterError::InterpFromValue(e) => match e {
                ValueError::DivideByZero => ErrorKind::DivideByZero,
                ValueError::InvalidOperandType(_) => ErrorKind::InvalidOperandType,
                ValueError::NotAWholeNumber(_) => ErrorKind::NotAWholeNumber,
            },
        }
    }
}
