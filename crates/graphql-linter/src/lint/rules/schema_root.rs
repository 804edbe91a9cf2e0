use crate::{Diagnostic, SchemaDocument};

use super::LintRule;

/// A schema must define a `Query` type
pub struct MissingQueryRootRule;

impl LintRule for MissingQueryRootRule {
    fn name(&self) -> &'static str {
        "invalid-graphql-schema"
    }

    fn description(&self) -> &'static str {
        "The schema defines a Query root type"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        if document
            .object_types()
            .any(|obj| obj.name.as_str() == "Query")
        {
            return Vec::new();
        }

        vec![document.diagnostic(1, self.name(), "Query root type must be provided.")]
    }
}
