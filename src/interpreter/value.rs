use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Numbers come from literals and arithmetic; booleans come from literals,
/// comparisons and logical operators. Both can be bound with `define`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// A boolean value (`#t` or `#f`).
    Boolean(bool),
}

/// The type of a [`Value`], used in type error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Integer values.
    Number,
    /// Boolean values.
    Boolean,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Boolean(_) => ValueType::Boolean,
        }
    }

    /// Extracts the integer, or reports a type error.
    ///
    /// # Example
    /// ```
    /// use minilisp::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(3).as_number(1).unwrap(), 3);
    /// assert!(Value::Boolean(true).as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(_) => Err(RuntimeError::TypeError { expected: ValueType::Number,
                                                              found: self.value_type(),
                                                              line }),
        }
    }

    /// Extracts the boolean, or reports a type error.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Number(_) => Err(RuntimeError::TypeError { expected: ValueType::Boolean,
                                                             found: self.value_type(),
                                                             line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(true) => write!(f, "#t"),
            Self::Boolean(false) => write!(f, "#f"),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_and_type_tags() {
        assert_eq!(Value::from(7), Value::Number(7));
        assert_eq!(Value::from(false), Value::Boolean(false));
        assert_eq!(Value::from(7).value_type(), ValueType::Number);
        assert_eq!(Value::from(true).value_type(), ValueType::Boolean);
    }

    #[test]
    fn mismatches_report_the_found_type() {
        assert_eq!(Value::from(true).as_number(4),
                   Err(RuntimeError::TypeError { expected: ValueType::Number,
                                                 found:    ValueType::Boolean,
                                                 line:     4, }));
        assert_eq!(Value::from(1).as_bool(2),
                   Err(RuntimeError::TypeError { expected: ValueType::Boolean,
                                                 found:    ValueType::Number,
                                                 line:     2, }));
    }
}
