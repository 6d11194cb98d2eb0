//! Validation entry point
//!
//! [`Validator`] walks a value depth-first along its [`Schema`], writing every
//! violation into one [`ErrorSink`] keyed by dotted path. Each top-level call
//! gets a fresh sink unless the caller passes one in with
//! [`Validator::validate_into`].

use serde_json::Value;
use std::fmt;

use crate::checker;
use crate::config::{ReportPolicy, ValidationConfig};
use crate::error::{Result, SchemaError};
use crate::schema::Schema;
use crate::sink::ErrorSink;

static NULL: Value = Value::Null;

/// Outcome of one top-level validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: ErrorSink,
}

impl Validation {
    /// True when no message was reported anywhere in the tree
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ErrorSink {
        &self.errors
    }

    pub fn into_errors(self) -> ErrorSink {
        self.errors
    }
}

/// Schema-driven validator. Holds configuration only, no per-call state.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `value` against `schema` into a fresh error sink.
    ///
    /// Returns `Err` only for schema problems (such as nesting beyond
    /// `max_depth`); constraint failures end up in [`Validation::errors`].
    pub fn validate(&self, value: &Value, schema: &Schema) -> Result<Validation> {
        let mut errors = ErrorSink::new();
        self.validate_into(value, schema, &mut errors)?;
        Ok(Validation { errors })
    }

    /// Validate into a caller-owned sink, rooted at the configured label.
    ///
    /// The verdict is whether the sink is empty afterwards, so messages
    /// already in the sink count against it.
    pub fn validate_into(&self, value: &Value, schema: &Schema, sink: &mut ErrorSink) -> Result<bool> {
        self.validate_at(&self.config.root_label, value, schema, sink)
    }

    /// Validate into a caller-owned sink under an explicit path
    pub fn validate_at(
        &self,
        path: &str,
        value: &Value,
        schema: &Schema,
        sink: &mut ErrorSink,
    ) -> Result<bool> {
        tracing::debug!(path, schema_type = %schema.schema_type(), "validation started");

        // Messages reach the caller's sink only when the walk completes.
        let mut scratch = ErrorSink::new();
        let mut walk = Walk {
            config: &self.config,
            sink: &mut scratch,
            path: path.to_string(),
            depth: 0,
        };
        walk.visit(schema, value)?;

        sink.merge(scratch);
        let valid = sink.is_empty();
        tracing::debug!(path, valid, error_paths = sink.len(), "validation finished");
        Ok(valid)
    }

    /// Schema self-check hook. Currently accepts every schema.
    pub fn validate_schema(&self, _schema: &Schema) -> Result<()> {
        Ok(())
    }
}

/// Validate with the default configuration
pub fn validate(value: &Value, schema: &Schema) -> Result<Validation> {
    Validator::new().validate(value, schema)
}

/// Depth-first traversal state for one validation run
pub(crate) struct Walk<'a> {
    config: &'a ValidationConfig,
    sink: &'a mut ErrorSink,
    path: String,
    depth: usize,
}

impl<'a> Walk<'a> {
    pub(crate) fn policy(&self) -> ReportPolicy {
        self.config.report_policy
    }

    /// Append a message at the current path
    pub(crate) fn record(&mut self, message: String) {
        self.sink.push(&self.path, message);
    }

    /// Validate the node at the current path.
    ///
    /// A null value on a non-required schema is skipped entirely, root
    /// included, so nothing below it is walked.
    fn visit(&mut self, schema: &Schema, value: &Value) -> Result<()> {
        if value.is_null() && !schema.required {
            tracing::trace!(path = %self.path, "optional node absent, skipped");
            return Ok(());
        }
        if self.depth > self.config.max_depth {
            return Err(SchemaError::DepthExceeded {
                max_depth: self.config.max_depth,
                path: self.path.clone(),
            });
        }
        tracing::trace!(path = %self.path, schema_type = %schema.schema_type(), "checking node");
        checker::validate(self, schema, value)
    }

    /// Validate a child at `{path}.{segment}`; a missing child is null.
    pub(crate) fn descend(
        &mut self,
        segment: impl fmt::Display,
        schema: &Schema,
        value: Option<&Value>,
    ) -> Result<()> {
        let value = value.unwrap_or(&NULL);
        let parent_len = self.path.len();
        self.path.push('.');
        self.path.push_str(&segment.to_string());
        self.depth += 1;

        let result = self.visit(schema, value);

        self.depth -= 1;
        self.path.truncate(parent_len);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested(depth: usize) -> Schema {
        (0..depth).fold(Schema::string().required(), |inner, _| {
            Schema::hash().required().key("n", inner)
        })
    }

    #[test]
    fn test_fresh_sink_per_call() {
        let validator = Validator::new();
        let schema = Schema::string().required();

        let first = validator.validate(&json!(1), &schema).unwrap();
        assert!(!first.is_valid());

        let second = validator.validate(&json!("ok"), &schema).unwrap();
        assert!(second.is_valid());
    }

    #[test]
    fn test_validate_into_composes() {
        let validator = Validator::new();
        let mut sink = ErrorSink::new();

        let ok = validator
            .validate_at("left", &json!("x"), &Schema::string().required(), &mut sink)
            .unwrap();
        assert!(ok);

        let ok = validator
            .validate_at("right", &json!(null), &Schema::string().required(), &mut sink)
            .unwrap();
        assert!(!ok);

        // Earlier messages keep the verdict false
        let ok = validator
            .validate_at("again", &json!("y"), &Schema::string().required(), &mut sink)
            .unwrap();
        assert!(!ok);
        assert_eq!(sink.paths().collect::<Vec<_>>(), ["right"]);
    }

    #[test]
    fn test_root_label_from_config() {
        let config = ValidationConfig {
            root_label: "doc".to_string(),
            ..Default::default()
        };
        let validator = Validator::with_config(config);
        let schema = Schema::hash().key("a", Schema::string().required());
        let validation = validator.validate(&json!({ "b": 1 }), &schema).unwrap();
        assert!(validation.errors().contains("doc.a", "It can't be nil."));
    }

    #[test]
    fn test_depth_limit() {
        let config = ValidationConfig {
            max_depth: 3,
            ..Default::default()
        };
        let validator = Validator::with_config(config);

        let value = json!({ "n": { "n": { "n": "leaf" } } });
        assert!(validator.validate(&value, &nested(3)).unwrap().is_valid());

        let value = json!({ "n": { "n": { "n": { "n": "leaf" } } } });
        match validator.validate(&value, &nested(4)) {
            Err(SchemaError::DepthExceeded { max_depth, path }) => {
                assert_eq!(max_depth, 3);
                assert_eq!(path, "self.n.n.n.n");
            }
            other => panic!("Expected DepthExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_walk_leaves_caller_sink_untouched() {
        let config = ValidationConfig {
            max_depth: 1,
            ..Default::default()
        };
        let validator = Validator::with_config(config);
        let schema = Schema::hash()
            .key("a", Schema::string().required())
            .key("b", Schema::hash().required().key("c", Schema::hash().required()));

        let mut sink = ErrorSink::new();
        sink.push("earlier", "kept");
        let result = validator.validate_into(&json!({ "a": 1, "b": {} }), &schema, &mut sink);

        assert!(matches!(result, Err(SchemaError::DepthExceeded { .. })));
        assert_eq!(sink.paths().collect::<Vec<_>>(), ["earlier"]);
        assert_eq!(sink.message_count(), 1);
    }

    #[test]
    fn test_validate_schema_is_a_no_op() {
        let schema = Schema::hash().key("a", Schema::string());
        assert!(Validator::new().validate_schema(&schema).is_ok());
    }
}
