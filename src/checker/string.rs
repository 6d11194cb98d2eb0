//! String checks: type, blankness, format and length bounds

use crate::schema::StringConstraints;
use crate::violation::{ValueKind, Violation};

use super::BaseChecker;

pub(super) fn check(base: &mut BaseChecker<'_, '_>, constraints: &StringConstraints) {
    let value = base.value;
    let s = value.as_str();

    base.validate_instance_of(ValueKind::String, s.is_some());

    if !constraints.blank && s.map_or(true, |s| s.trim().is_empty()) {
        base.report_error(Violation::Blank);
    }

    if let Some(format) = &constraints.format {
        if !s.map_or(false, |s| format.is_match(s)) {
            base.report_error(Violation::FormatMismatch);
        }
    }

    let Some(length) = &constraints.length else { return };
    let len = s.map(|s| s.chars().count());

    if let Some(min) = length.min_length {
        if len.map_or(true, |n| n < min) {
            base.report_error(Violation::TooShort(min));
        }
    }
    if let Some(max) = length.max_length {
        if len.map_or(true, |n| n > max) {
            base.report_error(Violation::TooLong(max));
        }
    }
    if let Some(exact) = length.value_length {
        if len != Some(exact) {
            base.report_error(Violation::ExactLengthMismatch(exact));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::Schema;
    use crate::validator::Validator;
    use regex::Regex;
    use serde_json::{json, Value};

    fn errors_at_root(value: Value, schema: &Schema) -> Vec<String> {
        let validation = Validator::new().validate(&value, schema).unwrap();
        validation.errors().get("self").to_vec()
    }

    #[test]
    fn test_blank_allowed() {
        let schema = Schema::string().required().blank(true);
        assert!(errors_at_root(json!("   "), &schema).is_empty());
        assert!(errors_at_root(json!(""), &schema).is_empty());
    }

    #[test]
    fn test_whitespace_is_blank() {
        let schema = Schema::string().required();
        assert_eq!(errors_at_root(json!(" \t\n"), &schema), ["It can't be blank."]);
    }

    #[test]
    fn test_non_string_fails_format_and_blank() {
        let schema = Schema::string().required().format(Regex::new("^1").unwrap());
        let errors = errors_at_root(json!(12), &schema);
        assert_eq!(
            errors,
            [
                "It is not an instance of String.",
                "It can't be blank.",
                "It doesn't match with a given regular expression.",
            ]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let schema = Schema::string().required().max_length(3);
        assert!(errors_at_root(json!("héé"), &schema).is_empty());
    }

    #[test]
    fn test_length_bounds_fire_independently() {
        let schema = Schema::string().required().min_length(4).value_length(2);
        let errors = errors_at_root(json!("abc"), &schema);
        assert_eq!(
            errors,
            ["It is too short (less than 4 characters).", "Length is not 2."]
        );
    }

    #[test]
    fn test_value_length_matches_min_and_max() {
        let exact = Schema::string().required().value_length(3);
        let bounded = Schema::string().required().min_length(3).max_length(3);
        let validator = Validator::new();

        for value in [json!("ab"), json!("abc"), json!("abcd"), json!(7), Value::Null] {
            let a = validator.validate(&value, &exact).unwrap().is_valid();
            let b = validator.validate(&value, &bounded).unwrap().is_valid();
            assert_eq!(a, b, "verdicts differ for {}", value);
        }
    }
}
