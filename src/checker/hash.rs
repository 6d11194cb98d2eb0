//! Hash checks: type, emptiness and per-key recursion

use crate::error::Result;
use crate::schema::{HashConstraints, KeySchema};
use crate::violation::{ValueKind, Violation};

use super::BaseChecker;

pub(super) fn check(
    base: &mut BaseChecker<'_, '_>,
    constraints: &HashConstraints,
    keys: &[KeySchema],
) -> Result<()> {
    let value = base.value;
    let map = value.as_object();

    base.validate_instance_of(ValueKind::Hash, map.is_some());

    if !constraints.empty && (value.is_null() || map.map_or(false, |m| m.is_empty())) {
        base.report_error(Violation::Empty);
    }

    for KeySchema { key, schema } in keys {
        let child = map.and_then(|m| m.get(key));
        base.walk.descend(key, schema, child)?;
    }
    Ok(())
}
