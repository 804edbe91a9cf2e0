use crate::data_types::data_type_rules;
use crate::document::SYNTAX_ERROR_RULE;
use crate::federation::federation_rules;
use crate::{Diagnostic, SchemaDocument};
use graphql_linter_config::Settings;

use super::rules::{all_rules, LintRule};

/// Rule id for schema files that could not be read
pub const READ_FAILURE_RULE: &str = "failed-to-read-schema-file";

/// Every check the linter knows, in report order: the rule catalogue, then
/// the data-type validator, then the federation checks
#[must_use]
pub fn rule_catalogue() -> Vec<Box<dyn LintRule>> {
    all_rules()
        .into_iter()
        .chain(data_type_rules())
        .chain(federation_rules())
        .collect()
}

/// Every rule id that can appear in a diagnostic
#[must_use]
pub fn all_rule_ids() -> Vec<&'static str> {
    [SYNTAX_ERROR_RULE, READ_FAILURE_RULE]
        .into_iter()
        .chain(rule_catalogue().iter().map(|rule| rule.name()))
        .collect()
}

/// Linter that runs the checks enabled by the settings
pub struct Linter {
    settings: Settings,
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let rules = rule_catalogue()
            .into_iter()
            .filter(|rule| rule.group().is_enabled(&settings))
            .collect();

        Self { settings, rules }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Ids of the enabled rules, in the order they run
    pub fn enabled_rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Run every enabled rule on a document.
    ///
    /// Syntax errors come first, then each rule's diagnostics in rule order.
    #[must_use]
    pub fn lint(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = document.syntax_diagnostics();

        for rule in &self.rules {
            let rule_diagnostics = rule.check(document);
            if !rule_diagnostics.is_empty() {
                tracing::debug!(
                    file = document.path(),
                    rule = rule.name(),
                    count = rule_diagnostics.len(),
                    "Rule reported diagnostics"
                );
            }
            diagnostics.extend(rule_diagnostics);
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_ids(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(Diagnostic::rule_id).collect()
    }

    #[test]
    fn test_default_settings_enable_everything() {
        let linter = Linter::new(Settings::default());
        assert_eq!(linter.enabled_rules().count(), rule_catalogue().len());
    }

    #[test]
    fn test_strict_mode_off_skips_conventions() {
        let linter = Linter::new(Settings {
            strict_mode: false,
            ..Settings::default()
        });
        let document = SchemaDocument::parse(
            "schema.graphql",
            "\"\"\"Root\"\"\"\ntype Query {\n  \"\"\"B\"\"\"\n  b: Int\n  \"\"\"A\"\"\"\n  a: Int\n}\n",
        );

        assert!(linter.lint(&document).is_empty());
        assert!(!linter.enabled_rules().any(|id| id.starts_with("relay-")));
    }

    #[test]
    fn test_description_rules_follow_setting() {
        let document = SchemaDocument::parse("schema.graphql", "type Query { id: ID }\ntype PageInfo { a: Int }");

        let strict = Linter::new(Settings::default());
        let ids = rule_ids(&strict.lint(&document)).join(",");
        assert!(ids.contains("types-have-descriptions"));
        assert!(ids.contains("fields-have-descriptions"));

        let relaxed = Linter::new(Settings {
            check_descriptions: false,
            ..Settings::default()
        });
        let diagnostics = relaxed.lint(&document);
        assert!(!rule_ids(&diagnostics)
            .iter()
            .any(|id| id.ends_with("-have-descriptions")));
    }

    #[test]
    fn test_federation_setting() {
        let document = SchemaDocument::parse(
            "schema.graphql",
            "\"\"\"Root\"\"\"\ntype Query {\n  \"\"\"Id\"\"\"\n  id: ID @custom\n}\ntype PageInfo { a: Int }",
        );

        let with = Linter::new(Settings::default());
        assert!(rule_ids(&with.lint(&document)).contains(&"invalid-federation-directive"));

        let without = Linter::new(Settings {
            validate_federation: false,
            ..Settings::default()
        });
        assert!(!rule_ids(&without.lint(&document)).contains(&"invalid-federation-directive"));
    }

    #[test]
    fn test_syntax_errors_come_first() {
        let linter = Linter::new(Settings::default());
        let document = SchemaDocument::parse("schema.graphql", "type Query {\n  id: ID\n}\ntype {");

        let diagnostics = linter.lint(&document);
        assert_eq!(diagnostics[0].rule_id(), SYNTAX_ERROR_RULE);
    }

    #[test]
    fn test_all_rule_ids() {
        let ids = all_rule_ids();
        for expected in [
            "graphql-syntax-error",
            "failed-to-read-schema-file",
            "types-are-capitalized",
            "invalid-graphql-schema",
            "defined-types-are-used",
            "undefined-type",
            "suspicious-enum-value",
            "invalid-enum-value",
            "invalid-federation-directive",
            "federation-composition",
        ] {
            assert!(ids.contains(&expected), "missing {expected}");
        }
    }
}
