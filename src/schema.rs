//! Schema types and structures
//!
//! A [`Schema`] is one declarative rule: the expected type, whether the value
//! is required, type-specific constraints, an optional custom predicate and,
//! for hashes and arrays, the child schemas.
//!
//! Schemas are built in code with the builder methods, or loaded from a
//! descriptor value with [`Schema::from_value`]:
//!
//! ```json
//! {
//!   "type": "hash",
//!   "constraints": { "empty": false },
//!   "keys": [
//!     { "key": "a", "type": "string", "required": true,
//!       "constraints": { "length": { "value_length": 1 } } },
//!     { "key": "b", "type": "string" }
//!   ]
//! }
//! ```

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SchemaError};

/// Custom predicate run against a non-null value
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Declared type of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    /// Key/value mapping
    Hash,
    /// Positional sequence
    Array,
}

impl SchemaType {
    /// Canonical name used in descriptors
    pub fn name(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Hash => "hash",
            SchemaType::Array => "array",
        }
    }

    /// Look up a type by descriptor name, including the common aliases
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(SchemaType::String),
            "number" => Some(SchemaType::Number),
            "boolean" | "bool" => Some(SchemaType::Boolean),
            "hash" | "mapping" | "object" => Some(SchemaType::Hash),
            "array" | "sequence" => Some(SchemaType::Array),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Length bounds for strings, counted in characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LengthConstraints {
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Exact length; acts as both the lower and the upper bound
    #[serde(default)]
    pub value_length: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct StringConstraints {
    /// Allow blank (empty or whitespace-only) values
    pub blank: bool,
    pub format: Option<Regex>,
    pub length: Option<LengthConstraints>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberConstraints {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashConstraints {
    /// Allow an empty mapping
    pub empty: bool,
}

/// Type-specific part of a schema node
#[derive(Debug, Clone)]
pub enum SchemaKind {
    String(StringConstraints),
    Number(NumberConstraints),
    Boolean,
    Hash {
        constraints: HashConstraints,
        keys: Vec<KeySchema>,
    },
    /// Tuple-style: `items[i]` describes the element at index `i`
    Array { items: Vec<Schema> },
}

/// Child schema of a hash, bound to the key it describes
#[derive(Debug, Clone)]
pub struct KeySchema {
    pub key: String,
    pub schema: Schema,
}

/// A single schema node
#[derive(Clone)]
pub struct Schema {
    pub kind: SchemaKind,
    pub required: bool,
    pub validate: Option<Predicate>,
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("validate", &self.validate.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}

impl Schema {
    /// Create a non-required schema of the given kind
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            required: false,
            validate: None,
        }
    }

    pub fn string() -> Self {
        Self::new(SchemaKind::String(StringConstraints::default()))
    }

    pub fn number() -> Self {
        Self::new(SchemaKind::Number(NumberConstraints::default()))
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    pub fn hash() -> Self {
        Self::new(SchemaKind::Hash {
            constraints: HashConstraints::default(),
            keys: Vec::new(),
        })
    }

    pub fn array() -> Self {
        Self::new(SchemaKind::Array { items: Vec::new() })
    }

    /// Declared type of this node
    pub fn schema_type(&self) -> SchemaType {
        match self.kind {
            SchemaKind::String(_) => SchemaType::String,
            SchemaKind::Number(_) => SchemaType::Number,
            SchemaKind::Boolean => SchemaType::Boolean,
            SchemaKind::Hash { .. } => SchemaType::Hash,
            SchemaKind::Array { .. } => SchemaType::Array,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a custom predicate
    pub fn validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(predicate));
        self
    }

    /// Run the custom predicate; nodes without one always pass
    pub fn predicate_holds(&self, value: &Value) -> bool {
        self.validate.as_ref().map_or(true, |p| p(value))
    }

    /// Allow blank strings
    pub fn blank(mut self, allow: bool) -> Self {
        match &mut self.kind {
            SchemaKind::String(c) => c.blank = allow,
            _ => self.misapplied("blank"),
        }
        self
    }

    /// Match against `pattern` as given; build it with
    /// `RegexBuilder::multi_line` for per-line anchors
    pub fn format(mut self, pattern: Regex) -> Self {
        match &mut self.kind {
            SchemaKind::String(c) => c.format = Some(pattern),
            _ => self.misapplied("format"),
        }
        self
    }

    pub fn min_length(self, n: usize) -> Self {
        self.with_length("min_length", |l| l.min_length = Some(n))
    }

    pub fn max_length(self, n: usize) -> Self {
        self.with_length("max_length", |l| l.max_length = Some(n))
    }

    pub fn value_length(self, n: usize) -> Self {
        self.with_length("value_length", |l| l.value_length = Some(n))
    }

    pub fn minimum(mut self, bound: f64) -> Self {
        match &mut self.kind {
            SchemaKind::Number(c) => c.minimum = Some(bound),
            _ => self.misapplied("minimum"),
        }
        self
    }

    pub fn maximum(mut self, bound: f64) -> Self {
        match &mut self.kind {
            SchemaKind::Number(c) => c.maximum = Some(bound),
            _ => self.misapplied("maximum"),
        }
        self
    }

    /// Allow an empty hash
    pub fn empty(mut self, allow: bool) -> Self {
        match &mut self.kind {
            SchemaKind::Hash { constraints, .. } => constraints.empty = allow,
            _ => self.misapplied("empty"),
        }
        self
    }

    /// Add a child schema for `key` (hash only)
    pub fn key(mut self, key: impl Into<String>, schema: Schema) -> Self {
        match &mut self.kind {
            SchemaKind::Hash { keys, .. } => keys.push(KeySchema {
                key: key.into(),
                schema,
            }),
            _ => self.misapplied("keys"),
        }
        self
    }

    /// Add the schema for the next array slot
    pub fn item(mut self, schema: Schema) -> Self {
        match &mut self.kind {
            SchemaKind::Array { items } => items.push(schema),
            _ => self.misapplied("items"),
        }
        self
    }

    fn with_length(mut self, field: &str, set: impl FnOnce(&mut LengthConstraints)) -> Self {
        match &mut self.kind {
            SchemaKind::String(c) => set(c.length.get_or_insert_with(LengthConstraints::default)),
            _ => self.misapplied(field),
        }
        self
    }

    fn misapplied(&self, field: &str) {
        tracing::warn!(
            schema_type = %self.schema_type(),
            field,
            "constraint does not apply to this schema type, ignored"
        );
    }

    /// Build a schema from a descriptor value
    pub fn from_value(value: &Value) -> Result<Self> {
        let descriptor = SchemaDescriptor::deserialize(value)?;
        descriptor.into_schema("self")
    }

    /// Build a schema from a JSON descriptor string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

// Descriptor format. Fields unknown to a type are ignored, as are unknown
// top-level fields (e.g. `ordered`).
#[derive(Debug, Deserialize)]
struct SchemaDescriptor {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    constraints: ConstraintDescriptor,
    #[serde(default)]
    keys: Vec<SchemaDescriptor>,
    #[serde(default)]
    items: Vec<SchemaDescriptor>,
}

#[derive(Debug, Default, Deserialize)]
struct ConstraintDescriptor {
    #[serde(default)]
    blank: bool,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    length: Option<LengthConstraints>,
    #[serde(default)]
    empty: bool,
    #[serde(default)]
    minimum: Option<f64>,
    #[serde(default)]
    maximum: Option<f64>,
}

/// Compile a descriptor pattern. `^` and `$` anchor at line boundaries, so
/// `^a` matches `"x\nabc"`.
fn compile_format(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).multi_line(true).build()?)
}

impl SchemaDescriptor {
    fn into_schema(self, path: &str) -> Result<Schema> {
        let schema_type =
            SchemaType::from_name(&self.type_name).ok_or_else(|| SchemaError::UnknownType {
                name: self.type_name.clone(),
                path: path.to_string(),
            })?;

        let c = self.constraints;
        let kind = match schema_type {
            SchemaType::String => {
                let format = match c.format {
                    Some(pattern) => Some(compile_format(&pattern)?),
                    None => None,
                };
                SchemaKind::String(StringConstraints {
                    blank: c.blank,
                    format,
                    length: c.length,
                })
            }
            SchemaType::Number => SchemaKind::Number(NumberConstraints {
                minimum: c.minimum,
                maximum: c.maximum,
            }),
            SchemaType::Boolean => SchemaKind::Boolean,
            SchemaType::Hash => {
                let mut keys = Vec::with_capacity(self.keys.len());
                for (i, child) in self.keys.into_iter().enumerate() {
                    let key = child.key.clone().ok_or_else(|| {
                        SchemaError::invalid(&format!("{}.keys.{}", path, i), "missing 'key'")
                    })?;
                    let schema = child.into_schema(&format!("{}.{}", path, key))?;
                    keys.push(KeySchema { key, schema });
                }
                SchemaKind::Hash {
                    constraints: HashConstraints { empty: c.empty },
                    keys,
                }
            }
            SchemaType::Array => {
                let items = self
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(i, child)| child.into_schema(&format!("{}.{}", path, i)))
                    .collect::<Result<Vec<_>>>()?;
                SchemaKind::Array { items }
            }
        };

        Ok(Schema {
            kind,
            required: self.required,
            validate: None,
        })
    }
}
