//! Number checks: type and inclusive bounds

use crate::schema::NumberConstraints;
use crate::violation::{ValueKind, Violation};

use super::BaseChecker;

pub(super) fn check(base: &mut BaseChecker<'_, '_>, constraints: &NumberConstraints) {
    let n = base.value.as_f64();

    base.validate_instance_of(ValueKind::Number, n.is_some());

    if let Some(min) = constraints.minimum {
        if n.map_or(true, |n| n < min) {
            base.report_error(Violation::TooSmall(min));
        }
    }
    if let Some(max) = constraints.maximum {
        if n.map_or(true, |n| n > max) {
            base.report_error(Violation::TooLarge(max));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::Schema;
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn test_bounds_are_inclusive() {
        let schema = Schema::number().required().minimum(1.0).maximum(3.0);
        let validator = Validator::new();
        assert!(validator.validate(&json!(1), &schema).unwrap().is_valid());
        assert!(validator.validate(&json!(3.0), &schema).unwrap().is_valid());

        let validation = validator.validate(&json!(0.5), &schema).unwrap();
        assert_eq!(validation.errors().get("self"), ["It is too small (less than 1)."]);
    }

    #[test]
    fn test_string_is_not_a_number() {
        let schema = Schema::number().required().maximum(10.0);
        let validation = Validator::new().validate(&json!("5"), &schema).unwrap();
        assert_eq!(
            validation.errors().get("self"),
            ["It is not an instance of Number.", "It is too large (more than 10)."]
        );
    }
}
