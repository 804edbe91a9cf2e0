use crate::{Diagnostic, SchemaDocument};
use apollo_compiler::{ast, Name, Node};
use std::collections::HashSet;

use super::{LintRule, ROOT_OPERATION_TYPES};

/// Every user-defined type must be referenced somewhere in the schema
pub struct DefinedTypesAreUsedRule;

impl LintRule for DefinedTypesAreUsedRule {
    fn name(&self) -> &'static str {
        "defined-types-are-used"
    }

    fn description(&self) -> &'static str {
        "Defined types are referenced by a field, argument, input field or union"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let used = used_type_names(document);

        document
            .ast()
            .definitions
            .iter()
            .filter_map(defined_name)
            .filter(|name| !ROOT_OPERATION_TYPES.contains(&name.as_str()))
            .filter(|name| !used.contains(name.as_str()))
            .map(|name| {
                let line = document.line_of_name(name, name.as_str());
                document.diagnostic(
                    line,
                    self.name(),
                    format!("The type '{name}' is defined in the schema but not used anywhere."),
                )
            })
            .collect()
    }
}

fn defined_name(definition: &ast::Definition) -> Option<&Name> {
    match definition {
        ast::Definition::ObjectTypeDefinition(d) => Some(&d.name),
        ast::Definition::InterfaceTypeDefinition(d) => Some(&d.name),
        ast::Definition::InputObjectTypeDefinition(d) => Some(&d.name),
        ast::Definition::EnumTypeDefinition(d) => Some(&d.name),
        ast::Definition::UnionTypeDefinition(d) => Some(&d.name),
        ast::Definition::ScalarTypeDefinition(d) => Some(&d.name),
        _ => None,
    }
}

/// Base names of every field type, input value type and union member
fn used_type_names(document: &SchemaDocument) -> HashSet<&str> {
    let mut used = HashSet::new();

    for definition in &document.ast().definitions {
        match definition {
            ast::Definition::ObjectTypeDefinition(d) => mark_fields(&mut used, &d.fields),
            ast::Definition::ObjectTypeExtension(d) => mark_fields(&mut used, &d.fields),
            ast::Definition::InterfaceTypeDefinition(d) => mark_fields(&mut used, &d.fields),
            ast::Definition::InterfaceTypeExtension(d) => mark_fields(&mut used, &d.fields),
            ast::Definition::InputObjectTypeDefinition(d) => mark_inputs(&mut used, &d.fields),
            ast::Definition::InputObjectTypeExtension(d) => mark_inputs(&mut used, &d.fields),
            ast::Definition::UnionTypeDefinition(d) => {
                used.extend(d.members.iter().map(Name::as_str));
            }
            ast::Definition::UnionTypeExtension(d) => {
                used.extend(d.members.iter().map(Name::as_str));
            }
            _ => {}
        }
    }

    used
}

fn mark_fields<'a>(used: &mut HashSet<&'a str>, fields: &'a [Node<ast::FieldDefinition>]) {
    for field in fields {
        used.insert(field.ty.inner_named_type().as_str());
        mark_inputs(used, &field.arguments);
    }
}

fn mark_inputs<'a>(used: &mut HashSet<&'a str>, inputs: &'a [Node<ast::InputValueDefinition>]) {
    used.extend(inputs.iter().map(|input| input.ty.inner_named_type().as_str()));
}

#[cfg(test)]
mod tests {
    use super::super::check_rule;
    use super::*;

    #[test]
    fn test_unused_types_are_reported() {
        let diagnostics = check_rule(
            &DefinedTypesAreUsedRule,
            r"
type Query {
  user(filter: UserFilter): User
}

type User { id: ID role: Role }
enum Role { ADMIN }
input UserFilter { name: String }

type Orphan { id: ID }
scalar Date
",
        );

        let names: Vec<&str> = diagnostics.iter().map(Diagnostic::text).collect();
        assert_eq!(
            names,
            vec![
                "The type 'Orphan' is defined in the schema but not used anywhere.",
                "The type 'Date' is defined in the schema but not used anywhere.",
            ]
        );
        assert_eq!(diagnostics[0].line, 10);
        assert_eq!(diagnostics[1].line, 11);
    }

    #[test]
    fn test_union_members_count_as_used() {
        let diagnostics = check_rule(
            &DefinedTypesAreUsedRule,
            "type Query { search: Result }\nunion Result = Book | Film\ntype Book { id: ID }\ntype Film { id: ID }\n",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_root_types_are_exempt() {
        let diagnostics = check_rule(
            &DefinedTypesAreUsedRule,
            "type Query { a: Int }\ntype Mutation { b: Int }\ntype Subscription { c: Int }\n",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_extension_fields_mark_usage() {
        let diagnostics = check_rule(
            &DefinedTypesAreUsedRule,
            "type Query { a: Int }\nextend type Query { me: User }\ntype User { id: ID }\n",
        );
        assert!(diagnostics.is_empty());
    }
}
