//! Shared schema fixtures.
//!
//! Prefer inline schemas when the shape of the schema is the point of the
//! test; use these when a test only needs a schema with known properties.

/// Passes every rule under the default settings.
///
/// Kept in sync with [`crate::SchemaBuilder::clean_baseline`].
pub const CLEAN_BASELINE: &str = r#""""Relay pagination details"""
type PageInfo {
  """Whether another page follows"""
  hasNextPage: Boolean
}

"""The root query"""
type Query {
  """The current page"""
  page: PageInfo
}
"#;

/// A schema that trips several rules at once, for reporter tests.
pub const MESSY_SCHEMA: &str = r#"type Query {
  user_name: String
  status: Status
}

enum Status {
  RED
  GREEN
  BLUE2
}
"#;

/// A federated subgraph that composes and uses only known directives.
pub const FEDERATED_SCHEMA: &str = r#""""Relay pagination details"""
type PageInfo {
  """Whether another page follows"""
  hasNextPage: Boolean
}

"""A product sold in the catalog"""
type Product @key(fields: "upc") {
  """Display name"""
  name: String @shareable
  """Universal product code"""
  upc: ID!
}

"""The root query"""
type Query {
  """The current page"""
  page: PageInfo
  """Every product"""
  products: [Product]
}
"#;
