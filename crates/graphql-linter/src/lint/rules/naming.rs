use crate::text::is_camel_case;
use crate::{Diagnostic, SchemaDocument};

use super::{LintRule, ROOT_OPERATION_TYPES};

/// Object type names must start with an upper-case letter
pub struct TypesAreCapitalizedRule;

impl LintRule for TypesAreCapitalizedRule {
    fn name(&self) -> &'static str {
        "types-are-capitalized"
    }

    fn description(&self) -> &'static str {
        "Object type names start with a capital letter"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        document
            .object_types()
            .filter(|obj| !ROOT_OPERATION_TYPES.contains(&obj.name.as_str()))
            .filter(|obj| {
                obj.name
                    .as_str()
                    .chars()
                    .next()
                    .is_some_and(|first| !first.is_uppercase())
            })
            .map(|obj| {
                let line = document.line_of_name(&obj.name, &format!("type {}", obj.name));
                document.diagnostic(
                    line,
                    self.name(),
                    format!(
                        "The object type '{}' should start with a capital letter.",
                        obj.name
                    ),
                )
            })
            .collect()
    }
}

/// Object fields must be camelCase
pub struct FieldsAreCamelCasedRule;

impl LintRule for FieldsAreCamelCasedRule {
    fn name(&self) -> &'static str {
        "fields-are-camel-cased"
    }

    fn description(&self) -> &'static str {
        "Object type fields are camelCase"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (type_name, fields) in document.object_fields() {
            for field in fields {
                if is_camel_case(field.name.as_str()) {
                    continue;
                }
                let line = document.line_of_name(&field.name, &format!("{}:", field.name));
                diagnostics.push(document.diagnostic(
                    line,
                    self.name(),
                    format!("The field '{type_name}.{}' is not camel cased.", field.name),
                ));
            }
        }

        diagnostics
    }
}

/// Input object fields must be camelCase
pub struct InputObjectValuesAreCamelCasedRule;

impl LintRule for InputObjectValuesAreCamelCasedRule {
    fn name(&self) -> &'static str {
        "input-object-values-are-camel-cased"
    }

    fn description(&self) -> &'static str {
        "Input object fields are camelCase"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for input in document.input_types() {
            for field in &input.fields {
                if is_camel_case(field.name.as_str()) {
                    continue;
                }
                let line = document.line_of_name(&field.name, &format!("{}:", field.name));
                diagnostics.push(document.diagnostic(
                    line,
                    self.name(),
                    format!(
                        "The input value '{}.{}' is not camel cased.",
                        input.name, field.name
                    ),
                ));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::super::check_rule;
    use super::*;

    #[test]
    fn test_lowercase_type_is_reported() {
        let diagnostics = check_rule(
            &TypesAreCapitalizedRule,
            "type Query { a: Int }\n\ntype user { id: ID }\n",
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 3);
        assert_eq!(diagnostics[0].rule_id(), "types-are-capitalized");
        assert!(diagnostics[0].message.contains("'user'"));
        assert_eq!(diagnostics[0].line_content, "type user { id: ID }");
    }

    #[test]
    fn test_capitalized_types_pass() {
        let diagnostics = check_rule(
            &TypesAreCapitalizedRule,
            "type Query { a: Int }\ntype User { id: ID }\n",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_snake_case_fields_are_reported() {
        let diagnostics = check_rule(
            &FieldsAreCamelCasedRule,
            "type User {\n  id: ID\n  first_name: String\n  LastName: String\n}\n",
        );

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].line, 3);
        assert!(diagnostics[0].message.contains("'User.first_name'"));
        assert_eq!(diagnostics[1].line, 4);
        assert!(diagnostics[1].message.contains("'User.LastName'"));
    }

    #[test]
    fn test_extension_fields_are_checked() {
        let diagnostics = check_rule(
            &FieldsAreCamelCasedRule,
            "type User { id: ID }\nextend type User { user_name: String }\n",
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 2);
    }

    #[test]
    fn test_input_fields_are_checked() {
        let diagnostics = check_rule(
            &InputObjectValuesAreCamelCasedRule,
            "input UserFilter {\n  name: String\n  created_at: String\n}\n",
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "input-object-values-are-camel-cased: The input value 'UserFilter.created_at' is not camel cased."
        );
        assert_eq!(diagnostics[0].line, 3);
    }
}
