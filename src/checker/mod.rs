//! Constraint checkers
//!
//! Every node runs the shared checks first (nil, custom predicate), then the
//! checks of its declared type. All violations go through
//! [`BaseChecker::report_error`], the only place the reporting policy is
//! applied.

mod array;
mod boolean;
mod hash;
mod number;
mod string;

use serde_json::Value;

use crate::error::Result;
use crate::schema::{Schema, SchemaKind};
use crate::validator::Walk;
use crate::violation::{ValueKind, Violation};

/// Shared state and checks for the node currently being validated
pub(crate) struct BaseChecker<'c, 'a> {
    pub(crate) walk: &'c mut Walk<'a>,
    pub(crate) schema: &'c Schema,
    pub(crate) value: &'c Value,
}

impl<'c, 'a> BaseChecker<'c, 'a> {
    pub(crate) fn new(walk: &'c mut Walk<'a>, schema: &'c Schema, value: &'c Value) -> Self {
        Self { walk, schema, value }
    }

    /// Record a violation at the current path, subject to the reporting policy
    pub(crate) fn report_error(&mut self, violation: Violation) {
        let present = !self.value.is_null();
        if !self.walk.policy().reports(self.schema.required, present) {
            return;
        }
        self.walk.record(violation.to_string());
    }

    pub(crate) fn validate_instance_of(&mut self, kind: ValueKind, is_instance: bool) {
        if !is_instance {
            self.report_error(Violation::NotInstanceOf(kind));
        }
    }

    fn validate_nil(&mut self) {
        if self.value.is_null() {
            self.report_error(Violation::NilValue);
        }
    }

    fn validate_custom(&mut self) {
        if self.value.is_null() || !self.schema.predicate_holds(self.value) {
            self.report_error(Violation::CustomFailed);
        }
    }
}

/// Run the shared checks and then the checks of the schema's declared type
pub(crate) fn validate(walk: &mut Walk<'_>, schema: &Schema, value: &Value) -> Result<()> {
    let mut base = BaseChecker::new(walk, schema, value);
    base.validate_nil();
    base.validate_custom();

    match &schema.kind {
        SchemaKind::String(constraints) => string::check(&mut base, constraints),
        SchemaKind::Number(constraints) => number::check(&mut base, constraints),
        SchemaKind::Boolean => boolean::check(&mut base),
        SchemaKind::Hash { constraints, keys } => return hash::check(&mut base, constraints, keys),
        SchemaKind::Array { items } => return array::check(&mut base, items),
    }
    Ok(())
}
