//! Federation awareness: the directive allow-list and the subgraph composition check.

mod composition;
mod directives;

pub use composition::{
    composition_errors, validate_federation_schema, CompositionError, FederationCompositionRule,
    COMPOSITION_RULE,
};
pub use directives::{
    suggest_type_directive, InvalidFederationDirectiveRule, ALLOWED_DIRECTIVES,
    INVALID_DIRECTIVE_RULE,
};

use crate::lint::LintRule;

/// Federation checks, in the order they report
pub fn federation_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(InvalidFederationDirectiveRule),
        Box::new(FederationCompositionRule),
    ]
}
