//! Canonical text form of evaluation results.
//!
//! ```text
//! descriptor  ::= "(value (" body "))" | "(error \"" message "\")"
//! body        ::= "number " integer | "boolean " ("true" | "false") | "void" | "function"
//! integer     ::= ["-"] digit+
//! ```
//!
//! Evaluation works on typed values, descriptors are only built at the output
//! boundary. Decoding is kept for consumers that must read them back.

use std::fmt::Display;

use super::{Operand, RuntimeVal, ValueError};

const VALUE_PREFIX: &str = "(value (";
const VALUE_SUFFIX: &str = "))";
const ERROR_PREFIX: &str = "(error \"";
const ERROR_SUFFIX: &str = "\")";

pub fn encode_value(value: &RuntimeVal) -> String {
    format!("{}{}{}", VALUE_PREFIX, value, VALUE_SUFFIX)
}

pub fn encode_error<E: Display>(err: &E) -> String {
    format!("{}{}{}", ERROR_PREFIX, err, ERROR_SUFFIX)
}

pub fn encode<E: Display>(result: &Result<RuntimeVal, E>) -> String {
    match result {
        Ok(value) => encode_value(value),
        Err(e) => encode_error(e),
    }
}

pub fn decode_number(descriptor: &str) -> Result<i64, ValueError> {
    let digits = value_body(descriptor)
        .and_then(|body| body.strip_prefix("number "))
        .filter(|nb| is_integer(nb))
        .ok_or(ValueError::InvalidOperandType(Operand::Descriptor))?;

    // Only fails on overflow at this point
    digits
        .parse::<i64>()
        .map_err(|_| ValueError::InvalidOperandType(Operand::Descriptor))
}

pub fn decode_boolean(descriptor: &str) -> Result<bool, ValueError> {
    match value_body(descriptor) {
        Some("boolean true") => Ok(true),
        Some("boolean false") => Ok(false),
        _ => Err(ValueError::InvalidOperandType(Operand::Descriptor)),
    }
}

// Checks the shape, not a substring, so user data can't make a value look
// like an error
pub fn is_error(descriptor: &str) -> bool {
    descriptor.len() >= ERROR_PREFIX.len() + ERROR_SUFFIX.len()
        && descriptor.starts_with(ERROR_PREFIX)
        && descriptor.ends_with(ERROR_SUFFIX)
}

fn value_body(descriptor: &str) -> Option<&str> {
    descriptor
        .strip_prefix(VALUE_PREFIX)
        .and_then(|rest| rest.strip_suffix(VALUE_SUFFIX))
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
