//! Property values

use std::fmt;

/// Value stored under a property name.
///
/// Everything read from a document is `Text`. The typed variants exist for
/// callers that build documents programmatically; they serialize through
/// their `Display` form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    /// Compare against a string given on the command line.
    ///
    /// Text compares by string equality. Numbers and booleans compare typed
    /// when `expected` parses, so `"1.0"` matches `Number(1.0)`.
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            Value::Text(s) => s == expected,
            Value::Number(n) => expected
                .trim()
                .parse::<f64>()
                .map(|e| e == *n)
                .unwrap_or(false),
            Value::Bool(b) => expected
                .trim()
                .parse::<bool>()
                .map(|e| e == *b)
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            // integral numbers print without a trailing ".0"
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_integral_number_when_displayed_then_has_no_fraction() {
        assert_eq!(Value::Number(9.0).to_string(), "9");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn given_typed_values_when_matching_then_compares_typed() {
        assert!(Value::Number(1.0).matches("1.0"));
        assert!(Value::Number(1.0).matches("1"));
        assert!(!Value::Number(1.0).matches("one"));
        assert!(Value::Bool(true).matches("true"));
        assert!(!Value::Bool(true).matches("1"));
    }

    #[test]
    fn given_text_when_matching_then_uses_string_equality() {
        assert!(Value::from("1").matches("1"));
        assert!(!Value::from("1").matches("1.0"));
    }
}
