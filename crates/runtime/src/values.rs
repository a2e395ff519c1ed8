use std::fmt::{Debug, Display};

mod closure;
pub mod descriptor;
mod value_errors;

pub use closure::Closure;
pub use value_errors::{Operand, ValueError};

use crate::frontend::ast::BinaryOperator;


// Values are never modified once produced. Assigning a variable replaces the
// whole value in its environment
#[derive(Clone, PartialEq)]
pub enum RuntimeVal {
    Number(i64),
    Bool(bool),
    Void,
    Closure(Closure),
}

impl Debug for RuntimeVal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RuntimeVal::Number(nb) => write!(f, "{}", nb),
            RuntimeVal::Bool(b) => write!(f, "{}", b),
            RuntimeVal::Void => write!(f, "void"),
            RuntimeVal::Closure(closure) => write!(f, "{:?}", closure),
        }
    }
}

// Body of the value descriptor: number 5, boolean true, void, function
impl Display for RuntimeVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeVal::Number(nb) => write!(f, "number {}", nb),
            RuntimeVal::Bool(b) => write!(f, "boolean {}", b),
            RuntimeVal::Void => write!(f, "void"),
            // Closures are opaque outside of the interpreter
            RuntimeVal::Closure(_) => write!(f, "function"),
        }
    }
}

impl RuntimeVal {
    // Literals are checked as soon as they are evaluated
    pub fn from_literal(raw: &str) -> Result<RuntimeVal, ValueError> {
        match raw {
            "true" => Ok(RuntimeVal::Bool(true)),
            "false" => Ok(RuntimeVal::Bool(false)),
            _ => raw
                .parse::<i64>()
                .map(RuntimeVal::Number)
                .map_err(|_| ValueError::NotAWholeNumber(raw.to_string())),
        }
    }

    pub fn get_type(&self) -> &'static str {
        match self {
            RuntimeVal::Number(_) => "number",
            RuntimeVal::Bool(_) => "boolean",
            RuntimeVal::Void => "void",
            RuntimeVal::Closure(_) => "function",
        }
    }

    pub fn as_number(&self, operand: Operand) -> Result<i64, ValueError> {
        match self {
            RuntimeVal::Number(nb) => Ok(*nb),
            _ => Err(ValueError::InvalidOperandType(operand)),
        }
    }

    pub fn as_bool(&self, operand: Operand) -> Result<bool, ValueError> {
        match self {
            RuntimeVal::Bool(b) => Ok(*b),
            _ => Err(ValueError::InvalidOperandType(operand)),
        }
    }

    // Binary operations only apply to numbers. Arithmetic wraps on overflow and
    // division truncates toward zero
    pub fn calculate(&self, rhs: &RuntimeVal, operator: BinaryOperator) -> Result<RuntimeVal, ValueError> {
        let left = self.as_number(Operand::Binary)?;
        let right = rhs.as_number(Operand::Binary)?;

        let res = match operator {
            BinaryOperator::Add => RuntimeVal::Number(left.wrapping_add(right)),
            BinaryOperator::Sub => RuntimeVal::Number(left.wrapping_sub(right)),
            BinaryOperator::Mul => RuntimeVal::Number(left.wrapping_mul(right)),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(ValueError::DivideByZero);
                }

                RuntimeVal::Number(left.wrapping_div(right))
            }
            BinaryOperator::Eq => RuntimeVal::Bool(left == right),
            BinaryOperator::NotEq => RuntimeVal::Bool(left != right),
            BinaryOperator::Lt => RuntimeVal::Bool(left < right),
            BinaryOperator::Gt => RuntimeVal::Bool(left > right),
            BinaryOperator::LtEq => RuntimeVal::Bool(left <= right),
            BinaryOperator::GtEq => RuntimeVal::Bool(left >= right),
        };

        Ok(res)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(RuntimeVal::from_literal("42"), Ok(RuntimeVal::Number(42)));
        assert_eq!(RuntimeVal::from_literal("-7"), Ok(RuntimeVal::Number(-7)));
        assert_eq!(RuntimeVal::from_literal("true"), Ok(RuntimeVal::Bool(true)));
        assert_eq!(RuntimeVal::from_literal("false"), Ok(RuntimeVal::Bool(false)));

        for raw in ["1.5", "\"hello\"", "null", "True", "99999999999999999999"] {
            assert_eq!(
                RuntimeVal::from_literal(raw),
                Err(ValueError::NotAWholeNumber(raw.into()))
            );
        }
    }

    #[test]
    fn calculate() {
        let boolean = RuntimeVal::Bool(true);
        let seven = RuntimeVal::Number(7);
        let minus_two = RuntimeVal::Number(-2);

        assert_eq!(
            Err(ValueError::InvalidOperandType(Operand::Binary)),
            boolean.calculate(&seven, BinaryOperator::Add)
        );
        assert_eq!(
            Err(ValueError::InvalidOperandType(Operand::Binary)),
            seven.calculate(&RuntimeVal::Void, BinaryOperator::Lt)
        );
        assert_eq!(
            Ok(RuntimeVal::Number(5)),
            seven.calculate(&minus_two, BinaryOperator::Add)
        );
        assert_eq!(
            Ok(RuntimeVal::Number(9)),
            seven.calculate(&minus_two, BinaryOperator::Sub)
        );
        assert_eq!(
            Ok(RuntimeVal::Number(-14)),
            seven.calculate(&minus_two, BinaryOperator::Mul)
        );
        assert_eq!(
            Ok(RuntimeVal::Bool(true)),
            minus_two.calculate(&seven, BinaryOperator::LtEq)
        );
        assert_eq!(
            Ok(RuntimeVal::Bool(false)),
            minus_two.calculate(&seven, BinaryOperator::Eq)
        );
    }

    #[test]
    fn division_truncates_toward_zero() {
        let cases = [(7, 2, 3), (-7, 2, -3), (7, -2, -3), (-7, -2, 3), (1, 3, 0)];

        for (a, b, expected) in cases {
            assert_eq!(
                RuntimeVal::Number(a).calculate(&RuntimeVal::Number(b), BinaryOperator::Div),
                Ok(RuntimeVal::Number(expected))
            );
        }

        assert_eq!(
            RuntimeVal::Number(3).calculate(&RuntimeVal::Number(0), BinaryOperator::Div),
            Err(ValueError::DivideByZero)
        );
    }

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(
            RuntimeVal::Number(i64::MAX).calculate(&RuntimeVal::Number(1), BinaryOperator::Add),
            Ok(RuntimeVal::Number(i64::MIN))
        );
        assert_eq!(
            RuntimeVal::Number(i64::MIN).calculate(&RuntimeVal::Number(-1), BinaryOperator::Div),
            Ok(RuntimeVal::Number(i64::MIN))
        );
    }

    #[test]
    fn display_and_types() {
        assert_eq!(RuntimeVal::Number(-3).to_string(), "number -3");
        assert_eq!(RuntimeVal::Bool(false).to_string(), "boolean false");
        assert_eq!(RuntimeVal::Void.to_string(), "void");
        assert_eq!(RuntimeVal::Void.get_type(), "void");
        assert_eq!(
            RuntimeVal::Void.as_bool(Operand::Conditional),
            Err(ValueError::InvalidOperandType(Operand::Conditional))
        );
    }
}
