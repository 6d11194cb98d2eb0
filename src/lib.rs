//! Object Validator
//!
//! A recursive, schema-driven validator for dynamically-typed structured data
//! (`serde_json::Value` scalars, arrays and objects).
//!
//! ## Features
//!
//! - **Declarative Schemas**: type, required-ness, constraints, custom predicates
//! - **Recursive Descent**: hash keys and positional array items are validated
//!   against their own child schemas
//! - **Path-Keyed Errors**: every message lands under a dotted path such as
//!   `self.a` or `self.1.0`, and validation never stops at the first failure
//! - **Descriptor Loading**: schemas can be built from JSON descriptors
//!
//! ## Example
//!
//! ```
//! use object_validator::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::hash()
//!     .key("a", Schema::string().required().value_length(1))
//!     .key("b", Schema::string());
//!
//! let validation = Validator::new()
//!     .validate(&json!({ "a": "22", "b": 1 }), &schema)
//!     .unwrap();
//!
//! assert!(!validation.is_valid());
//! assert!(validation.errors().contains("self.a", "Length is not 1."));
//! assert!(validation.errors().contains("self.b", "It is not an instance of String."));
//! ```

mod checker;

pub mod config;
pub mod error;
pub mod schema;
pub mod sink;
pub mod validator;
pub mod violation;

pub use config::{OutputFormat, ReportPolicy, ValidationConfig, ValidatorConfig};
pub use error::{Result, SchemaError};
pub use schema::{KeySchema, Predicate, Schema, SchemaKind, SchemaType};
pub use sink::ErrorSink;
pub use validator::{validate, Validation, Validator};
pub use violation::{ValueKind, Violation};
