//! Array checks: type and positional (tuple) recursion

use crate::error::Result;
use crate::schema::Schema;
use crate::violation::ValueKind;

use super::BaseChecker;

pub(super) fn check(base: &mut BaseChecker<'_, '_>, items: &[Schema]) -> Result<()> {
    let value = base.value;
    let elements = value.as_array();

    base.validate_instance_of(ValueKind::Array, elements.is_some());

    // Extra elements beyond `items` are not checked.
    for (index, schema) in items.iter().enumerate() {
        let child = elements.and_then(|e| e.get(index));
        base.walk.descend(index, schema, child)?;
    }
    Ok(())
}
