use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("divide by zero")]
    DivideByZero,

    #[error("invalid {0}")]
    InvalidOperandType(Operand),

    // Raw literal text is kept for logs, the message stays generic
    #[error("not a whole number")]
    NotAWholeNumber(String),
}

// Position in which a value of the wrong kind was found
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operand {
    Binary,
    Unary,
    Logical,
    Conditional,
    LoopTest,
    Descriptor,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Binary => write!(f, "binary type(s)"),
            Operand::Unary => write!(f, "unary type"),
            Operand::Logical => write!(f, "logical type(s)"),
            Operand::Conditional => write!(f, "conditional type(s)"),
            Operand::LoopTest => write!(f, "loop test type"),
            Operand::Descriptor => write!(f, "descriptor type"),
        }
    }
}
