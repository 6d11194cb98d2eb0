use crate::violation::ValueKind;

use super::BaseChecker;

pub(super) fn check(base: &mut BaseChecker<'_, '_>) {
    let is_bool = base.value.is_boolean();
    base.validate_instance_of(ValueKind::Boolean, is_bool);
}
