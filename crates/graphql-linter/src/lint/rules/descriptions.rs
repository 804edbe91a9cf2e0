use crate::text::is_capitalized;
use crate::{Diagnostic, SchemaDocument};
use apollo_compiler::{ast, Name, Node};

use super::{LintRule, RuleGroup};

/// Object types must carry a description
pub struct TypesHaveDescriptionsRule;

impl LintRule for TypesHaveDescriptionsRule {
    fn name(&self) -> &'static str {
        "types-have-descriptions"
    }

    fn description(&self) -> &'static str {
        "Object types have a description"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Description
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        document
            .object_types()
            .filter(|obj| obj.description.is_none())
            .map(|obj| {
                let line = document.line_of_name(&obj.name, &format!("type {}", obj.name));
                document.diagnostic(
                    line,
                    self.name(),
                    format!("The object type '{}' is missing a description.", obj.name),
                )
            })
            .collect()
    }
}

/// Object type fields must carry a description
pub struct FieldsHaveDescriptionsRule;

impl LintRule for FieldsHaveDescriptionsRule {
    fn name(&self) -> &'static str {
        "fields-have-descriptions"
    }

    fn description(&self) -> &'static str {
        "Object type fields have a description"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Description
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (type_name, fields) in document.object_fields() {
            for field in fields.iter().filter(|f| f.description.is_none()) {
                let line = document.line_of_name(&field.name, &format!("{}:", field.name));
                diagnostics.push(document.diagnostic(
                    line,
                    self.name(),
                    format!(
                        "The field '{type_name}.{}' is missing a description.",
                        field.name
                    ),
                ));
            }
        }

        diagnostics
    }
}

/// Field arguments must carry a description
pub struct ArgumentsHaveDescriptionsRule;

impl LintRule for ArgumentsHaveDescriptionsRule {
    fn name(&self) -> &'static str {
        "arguments-have-descriptions"
    }

    fn description(&self) -> &'static str {
        "Field arguments have a description"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Description
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (type_name, fields) in fields_with_arguments(document) {
            for field in fields {
                for arg in field.arguments.iter().filter(|a| a.description.is_none()) {
                    let line = document.line_of_name(&arg.name, &format!("{}:", arg.name));
                    diagnostics.push(document.diagnostic(
                        line,
                        self.name(),
                        format!(
                            "The argument '{}' of field '{type_name}.{}' is missing a description.",
                            arg.name, field.name
                        ),
                    ));
                }
            }
        }

        diagnostics
    }
}

/// Enum values must carry a description
pub struct EnumValuesHaveDescriptionsRule;

impl LintRule for EnumValuesHaveDescriptionsRule {
    fn name(&self) -> &'static str {
        "enum-values-have-descriptions"
    }

    fn description(&self) -> &'static str {
        "Enum values have a description"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Description
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for enum_def in document.enum_types() {
            for value in enum_def.values.iter().filter(|v| v.description.is_none()) {
                let line = document.line_of_name(&value.value, value.value.as_str());
                diagnostics.push(document.diagnostic(
                    line,
                    self.name(),
                    format!(
                        "The enum value '{}.{}' is missing a description.",
                        enum_def.name, value.value
                    ),
                ));
            }
        }

        diagnostics
    }
}

/// Input object fields must carry a description
pub struct InputObjectValuesHaveDescriptionsRule;

impl LintRule for InputObjectValuesHaveDescriptionsRule {
    fn name(&self) -> &'static str {
        "input-object-values-have-descriptions"
    }

    fn description(&self) -> &'static str {
        "Input object fields have a description"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Description
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for input in document.input_types() {
            for field in input.fields.iter().filter(|f| f.description.is_none()) {
                let line = document.line_of_name(&field.name, &format!("{}:", field.name));
                diagnostics.push(document.diagnostic(
                    line,
                    self.name(),
                    format!(
                        "The input value '{}.{}' is missing a description.",
                        input.name, field.name
                    ),
                ));
            }
        }

        diagnostics
    }
}

/// Descriptions that are present must start with an upper-case letter
pub struct DescriptionsAreCapitalizedRule;

impl LintRule for DescriptionsAreCapitalizedRule {
    fn name(&self) -> &'static str {
        "descriptions-are-capitalized"
    }

    fn description(&self) -> &'static str {
        "Descriptions start with a capital letter"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Description
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut report = |name: &Name, fallback: String, subject: String| {
            let line = document.line_of_name(name, &fallback);
            diagnostics.push(document.diagnostic(
                line,
                self.name(),
                format!("The description for {subject} should be capitalized."),
            ));
        };

        for definition in &document.ast().definitions {
            if let Some((name, description)) = type_description(definition) {
                if is_lowercase_description(description) {
                    report(name, name.to_string(), format!("type '{name}'"));
                }
            }

            let (type_name, fields) = match definition {
                ast::Definition::ObjectTypeDefinition(d) => (&d.name, d.fields.as_slice()),
                ast::Definition::ObjectTypeExtension(d) => (&d.name, d.fields.as_slice()),
                ast::Definition::InterfaceTypeDefinition(d) => (&d.name, d.fields.as_slice()),
                ast::Definition::InputObjectTypeDefinition(input) => {
                    for field in &input.fields {
                        if is_lowercase_description(field.description.as_ref()) {
                            report(
                                &field.name,
                                format!("{}:", field.name),
                                format!("field '{}.{}'", input.name, field.name),
                            );
                        }
                    }
                    continue;
                }
                ast::Definition::EnumTypeDefinition(enum_def) => {
                    for value in &enum_def.values {
                        if is_lowercase_description(value.description.as_ref()) {
                            report(
                                &value.value,
                                value.value.to_string(),
                                format!("enum value '{}.{}'", enum_def.name, value.value),
                            );
                        }
                    }
                    continue;
                }
                _ => continue,
            };

            for field in fields {
                if is_lowercase_description(field.description.as_ref()) {
                    report(
                        &field.name,
                        format!("{}:", field.name),
                        format!("field '{type_name}.{}'", field.name),
                    );
                }
                for arg in &field.arguments {
                    if is_lowercase_description(arg.description.as_ref()) {
                        report(
                            &arg.name,
                            format!("{}:", arg.name),
                            format!("argument '{}' of field '{type_name}.{}'", arg.name, field.name),
                        );
                    }
                }
            }
        }

        diagnostics
    }
}

fn is_lowercase_description(description: Option<&Node<str>>) -> bool {
    description.is_some_and(|text| !is_capitalized(text))
}

fn type_description(definition: &ast::Definition) -> Option<(&Name, Option<&Node<str>>)> {
    match definition {
        ast::Definition::ObjectTypeDefinition(d) => Some((&d.name, d.description.as_ref())),
        ast::Definition::InterfaceTypeDefinition(d) => Some((&d.name, d.description.as_ref())),
        ast::Definition::InputObjectTypeDefinition(d) => Some((&d.name, d.description.as_ref())),
        ast::Definition::EnumTypeDefinition(d) => Some((&d.name, d.description.as_ref())),
        ast::Definition::UnionTypeDefinition(d) => Some((&d.name, d.description.as_ref())),
        ast::Definition::ScalarTypeDefinition(d) => Some((&d.name, d.description.as_ref())),
        _ => None,
    }
}

/// Field lists that can declare arguments: objects, their extensions and interfaces
fn fields_with_arguments(
    document: &SchemaDocument,
) -> impl Iterator<Item = (&Name, &[Node<ast::FieldDefinition>])> {
    document.object_fields().chain(
        document
            .interface_types()
            .map(|iface| (&iface.name, iface.fields.as_slice())),
    )
}
