use crate::text::{expected_sorting, first_unsorted};
use crate::{Diagnostic, SchemaDocument};
use apollo_compiler::Name;

use super::{LintRule, RuleGroup};

/// Enum values must be listed alphabetically
pub struct EnumValuesSortedRule;

impl LintRule for EnumValuesSortedRule {
    fn name(&self) -> &'static str {
        "enum-values-sorted-alphabetically"
    }

    fn description(&self) -> &'static str {
        "Enum values are sorted alphabetically"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Convention
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        document
            .enum_types()
            .filter_map(|enum_def| {
                let names: Vec<&Name> = enum_def.values.iter().map(|v| &v.value).collect();
                let diagnostic = check_order(
                    document,
                    self.name(),
                    &names,
                    &format!("The enum '{}'", enum_def.name),
                )?;
                // Suppressions for this rule can target one specific message
                let value = diagnostic.text().to_string();
                Some(diagnostic.with_value(value))
            })
            .collect()
    }
}

/// Input object fields must be listed alphabetically
pub struct InputObjectFieldsSortedRule;

impl LintRule for InputObjectFieldsSortedRule {
    fn name(&self) -> &'static str {
        "input-object-fields-sorted-alphabetically"
    }

    fn description(&self) -> &'static str {
        "Input object fields are sorted alphabetically"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Convention
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        document
            .input_types()
            .filter_map(|input| {
                let names: Vec<&Name> = input.fields.iter().map(|f| &f.name).collect();
                check_order(
                    document,
                    self.name(),
                    &names,
                    &format!("The fields of input type '{}'", input.name),
                )
            })
            .collect()
    }
}

/// Object type fields must be listed alphabetically
pub struct TypeFieldsSortedRule;

impl LintRule for TypeFieldsSortedRule {
    fn name(&self) -> &'static str {
        "type-fields-sorted-alphabetically"
    }

    fn description(&self) -> &'static str {
        "Object type fields are sorted alphabetically"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Convention
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        document
            .object_types()
            .filter_map(|obj| {
                let names: Vec<&Name> = obj.fields.iter().map(|f| &f.name).collect();
                check_order(
                    document,
                    self.name(),
                    &names,
                    &format!("The fields of object type '{}'", obj.name),
                )
            })
            .collect()
    }
}

/// Interface fields must be listed alphabetically
pub struct InterfaceFieldsSortedRule;

impl LintRule for InterfaceFieldsSortedRule {
    fn name(&self) -> &'static str {
        "interface-fields-sorted-alphabetically"
    }

    fn description(&self) -> &'static str {
        "Interface fields are sorted alphabetically"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Convention
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        document
            .interface_types()
            .filter_map(|iface| {
                let names: Vec<&Name> = iface.fields.iter().map(|f| &f.name).collect();
                check_order(
                    document,
                    self.name(),
                    &names,
                    &format!("The fields of interface type '{}'", iface.name),
                )
            })
            .collect()
    }
}

/// One diagnostic at the first out-of-order name, or `None` when sorted
fn check_order(
    document: &SchemaDocument,
    rule: &str,
    names: &[&Name],
    subject: &str,
) -> Option<Diagnostic> {
    let texts: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
    let position = first_unsorted(&texts)?;
    let offender = names[position];
    let line = document.line_of_name(offender, offender.as_str());

    Some(document.diagnostic(
        line,
        rule,
        format!(
            "{subject} should be sorted alphabetically. Expected sorting: {}",
            expected_sorting(texts.iter().copied())
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::check_rule;
    use super::*;

    #[test]
    fn test_unsorted_enum() {
        let diagnostics = check_rule(&EnumValuesSortedRule, "enum Color { RED GREEN BLUE }");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .ends_with("Expected sorting: BLUE, GREEN, RED"));
        assert_eq!(
            diagnostics[0].suppression_value(),
            "The enum 'Color' should be sorted alphabetically. Expected sorting: BLUE, GREEN, RED"
        );
    }

    #[test]
    fn test_sorted_and_short_enums_pass() {
        assert!(check_rule(&EnumValuesSortedRule, "enum Color { BLUE GREEN RED }").is_empty());
        assert!(check_rule(&EnumValuesSortedRule, "enum Single { ONLY }").is_empty());
    }

    #[test]
    fn test_diagnostic_points_at_first_divergence() {
        let diagnostics = check_rule(
            &TypeFieldsSortedRule,
            "type User {\n  email: String\n  name: String\n  id: ID\n}\n",
        );

        assert_eq!(diagnostics.len(), 1);
        // observed: email, name, id / expected: email, id, name
        assert_eq!(diagnostics[0].line, 3);
        assert_eq!(diagnostics[0].line_content, "name: String");
        assert!(diagnostics[0]
            .message
            .ends_with("Expected sorting: email, id, name"));
    }

    #[test]
    fn test_unsorted_input_fields() {
        let diagnostics = check_rule(
            &InputObjectFieldsSortedRule,
            "input Filter {\n  name: String\n  age: Int\n}\n",
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .starts_with("input-object-fields-sorted-alphabetically: The fields of input type 'Filter'"));
        assert_eq!(diagnostics[0].value, None);
    }

    #[test]
    fn test_unsorted_interface_fields() {
        let diagnostics = check_rule(
            &InterfaceFieldsSortedRule,
            "interface Node {\n  id: ID\n  createdAt: String\n}\n",
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .ends_with("Expected sorting: createdAt, id"));
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let diagnostics = check_rule(
            &TypeFieldsSortedRule,
            "type User {\n  Zeta: String\n  alpha: String\n}\n",
        );
        assert!(diagnostics.is_empty());
    }
}
