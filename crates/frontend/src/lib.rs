pub mod ast;
pub mod parser;

extern crate tools;
