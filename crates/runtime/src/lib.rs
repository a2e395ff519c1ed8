pub mod environment;
pub mod interpreter;
pub mod values;

extern crate frontend;

pub use frontend::ast::{Expression, Program, Statement};
