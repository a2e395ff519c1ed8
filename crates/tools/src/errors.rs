use colored::*;
use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub struct CodeErr(String);

impl Display for CodeErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Errors raised while reading a program get a location header. Line is 1-based,
// 0 meaning the position is unknown (empty input, io failure, ...)
pub trait ReportCodeErr {
    fn to_glob_err(&self, line: usize) -> CodeErr
    where
        Self: std::fmt::Display,
    {
        match line {
            0 => CodeErr(format!("{}: {}", "Error".red().bold(), self)),
            l => CodeErr(format!("{} at line {}: {}", "Error".red().bold(), l, self)),
        }
    }
}
