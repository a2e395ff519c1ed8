use thiserror::*;

use tools::errors::ReportCodeErr;

#[derive(Error, Debug, PartialEq)]
pub enum ParserError {
    #[error("no program given, input is empty")]
    EmptyInput,

    // serde_json errors aren't comparable, we keep what is reported
    #[error("invalid program tree: {message}")]
    InvalidTree { message: String, line: usize },
}

impl ParserError {
    pub fn line(&self) -> usize {
        match self {
            ParserError::EmptyInput => 0,
            ParserError::InvalidTree { line, .. } => *line,
        }
    }
}

impl From<serde_json::Error> for ParserError {
    fn from(e: serde_json::Error) -> Self {
        ParserError::InvalidTree {
            message: e.to_string(),
            line: e.line(),
        }
    }
}

// Implement global trait for final error
impl ReportCodeErr for ParserError {}
