mod errors_parser;

pub use crate::ast::{Expression, Program, Statement};
pub use errors_parser::ParserError;

use serde::Deserialize;
use tools::errors::{CodeErr, ReportCodeErr};
use tracing::{debug, warn};


// Turns the JSON tree given by the upstream parser into a typed Program
pub struct Parser {
    // Input may come with noise before the tree (BOM, shell artifacts, ...).
    // When set, parsing is retried from each following '{' until one succeeds
    pub recover_leading_noise: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            recover_leading_noise: true,
        }
    }
}

impl Parser {
    pub fn strict() -> Self {
        Self {
            recover_leading_noise: false,
        }
    }

    pub fn build_ast(&self, source: &str) -> Result<Program, CodeErr> {
        self.parse_program(source)
            .map_err(|e| e.to_glob_err(e.line()))
    }

    pub fn parse_program(&self, source: &str) -> Result<Program, ParserError> {
        if source.trim().is_empty() {
            return Err(ParserError::EmptyInput);
        }

        // First error is the one reported if nothing can be recovered
        let first_err = match load_tree(source) {
            Ok(program) => {
                debug!(statements = program.body.len(), "program tree loaded");
                return Ok(program);
            }
            Err(e) => ParserError::from(e),
        };

        if !self.recover_leading_noise {
            return Err(first_err);
        }

        // We skip index 0, it is the attempt that just failed
        for (start, _) in source.char_indices().skip(1).filter(|(_, c)| *c == '{') {
            if let Ok(program) = load_tree(&source[start..]) {
                warn!(skipped_bytes = start, "leading noise dropped before program tree");
                return Ok(program);
            }
        }

        Err(first_err)
    }
}

// No nesting limit: a left nested sum of a few hundred terms is a legit program.
// Trailing data after the tree is still an error
fn load_tree(source: &str) -> Result<Program, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_str(source);
    json.disable_recursion_limit();

    let program = Program::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;

    Ok(program)
}
