//! Validation failure kinds and their messages

use std::fmt;

/// Value family named in a type-membership failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Hash,
    Array,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "String",
            ValueKind::Number => "Number",
            ValueKind::Boolean => "Boolean",
            ValueKind::Hash => "Hash",
            ValueKind::Array => "Array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single constraint failure on one node.
///
/// Violations are reported into the sink, never returned as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    NilValue,
    CustomFailed,
    NotInstanceOf(ValueKind),
    Blank,
    FormatMismatch,
    TooShort(usize),
    TooLong(usize),
    ExactLengthMismatch(usize),
    Empty,
    TooSmall(f64),
    TooLarge(f64),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NilValue => write!(f, "It can't be nil."),
            Violation::CustomFailed => write!(f, "Custom validation (validate proc) failed."),
            Violation::NotInstanceOf(kind) => write!(f, "It is not an instance of {}.", kind),
            Violation::Blank => write!(f, "It can't be blank."),
            Violation::FormatMismatch => {
                write!(f, "It doesn't match with a given regular expression.")
            }
            Violation::TooShort(n) => write!(f, "It is too short (less than {} characters).", n),
            Violation::TooLong(n) => write!(f, "It is too long (more than {} characters).", n),
            Violation::ExactLengthMismatch(n) => write!(f, "Length is not {}.", n),
            Violation::Empty => write!(f, "It can't be empty."),
            Violation::TooSmall(n) => write!(f, "It is too small (less than {}).", n),
            Violation::TooLarge(n) => write!(f, "It is too large (more than {}).", n),
        }
    }
}
