mod deprecations;
mod descriptions;
mod naming;
mod relay;
mod schema_root;
mod sorting;
mod unused_types;

pub use deprecations::DeprecationsHaveAReasonRule;
pub use descriptions::{
    ArgumentsHaveDescriptionsRule, DescriptionsAreCapitalizedRule, EnumValuesHaveDescriptionsRule,
    FieldsHaveDescriptionsRule, InputObjectValuesHaveDescriptionsRule, TypesHaveDescriptionsRule,
};
pub use naming::{FieldsAreCamelCasedRule, InputObjectValuesAreCamelCasedRule, TypesAreCapitalizedRule};
pub use relay::{RelayConnectionArgumentsRule, RelayConnectionTypesRule, RelayPageInfoRule};
pub use schema_root::MissingQueryRootRule;
pub use sorting::{
    EnumValuesSortedRule, InputObjectFieldsSortedRule, InterfaceFieldsSortedRule,
    TypeFieldsSortedRule,
};
pub use unused_types::DefinedTypesAreUsedRule;

use crate::{Diagnostic, SchemaDocument};
use graphql_linter_config::Settings;

/// Which setting switches a rule on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    /// Always runs
    Core,
    /// Runs when `checkDescriptions` is on
    Description,
    /// Runs when `strictMode` is on
    Convention,
    /// Runs when `validateFederation` is on
    Federation,
}

impl RuleGroup {
    /// Whether rules of this group run under the given settings
    #[must_use]
    pub const fn is_enabled(self, settings: &Settings) -> bool {
        match self {
            Self::Core => true,
            Self::Description => settings.check_descriptions,
            Self::Convention => settings.strict_mode,
            Self::Federation => settings.validate_federation,
        }
    }
}

/// Trait for implementing per-schema lint rules
pub trait LintRule: Send + Sync {
    /// Rule id, used as the diagnostic prefix and for suppressions
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    fn group(&self) -> RuleGroup {
        RuleGroup::Core
    }

    /// Run the lint check on a parsed schema
    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic>;
}

/// The rule catalogue, in the order its diagnostics are reported
pub fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(TypesAreCapitalizedRule),
        Box::new(TypesHaveDescriptionsRule),
        Box::new(FieldsHaveDescriptionsRule),
        Box::new(FieldsAreCamelCasedRule),
        Box::new(ArgumentsHaveDescriptionsRule),
        Box::new(EnumValuesHaveDescriptionsRule),
        Box::new(InputObjectValuesHaveDescriptionsRule),
        Box::new(InputObjectValuesAreCamelCasedRule),
        Box::new(DeprecationsHaveAReasonRule),
        Box::new(DescriptionsAreCapitalizedRule),
        Box::new(EnumValuesSortedRule),
        Box::new(InputObjectFieldsSortedRule),
        Box::new(TypeFieldsSortedRule),
        Box::new(InterfaceFieldsSortedRule),
        Box::new(MissingQueryRootRule),
        Box::new(RelayPageInfoRule),
        Box::new(RelayConnectionTypesRule),
        Box::new(RelayConnectionArgumentsRule),
        Box::new(DefinedTypesAreUsedRule),
    ]
}

/// Root operation type names, exempt from some naming and usage rules
pub(crate) const ROOT_OPERATION_TYPES: &[&str] = &["Query", "Mutation", "Subscription"];

#[cfg(test)]
pub(crate) fn check_rule(rule: &dyn LintRule, schema: &str) -> Vec<Diagnostic> {
    rule.check(&SchemaDocument::parse("schema.graphql", schema))
}
