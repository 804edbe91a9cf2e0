//! # GraphQL Linter Test Utilities
//!
//! SDL builders and schema fixtures for the linter's tests. The builders
//! compose schema text from typed pieces so a test can start from a clean
//! baseline and add exactly the definition that should trip one rule.
//!
//! ```
//! use graphql_linter_test_utils::{FieldBuilder, ObjectBuilder, SchemaBuilder};
//!
//! let schema = SchemaBuilder::clean_baseline()
//!     .with_object(ObjectBuilder::new("Orphan").description("Never used").field(
//!         FieldBuilder::new("id", "ID").description("Identifier"),
//!     ))
//!     .build();
//!
//! assert!(schema.contains("type Orphan {"));
//! ```

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod builder;
pub mod fixtures;

pub use builder::{
    EnumBuilder, EnumValueBuilder, FieldBuilder, InputBuilder, InputValueBuilder, ObjectBuilder,
    SchemaBuilder, UnionBuilder,
};
