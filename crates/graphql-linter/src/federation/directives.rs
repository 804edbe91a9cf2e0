use crate::lint::{LintRule, RuleGroup};
use crate::text::levenshtein;
use crate::{Diagnostic, SchemaDocument};
use apollo_compiler::ast::{self, DirectiveList};
use apollo_compiler::Node;

pub const INVALID_DIRECTIVE_RULE: &str = "invalid-federation-directive";

/// Federation directives plus the directives built into GraphQL itself
pub const ALLOWED_DIRECTIVES: &[&str] = &[
    "key",
    "external",
    "requires",
    "provides",
    "extends",
    "shareable",
    "inaccessible",
    "override",
    "composeDirective",
    "interfaceObject",
    "tag",
    "deprecated",
    "specifiedBy",
    "oneOf",
];

/// Directives suggested for a misspelled directive on a type
const TYPE_DIRECTIVE_HINTS: &[&str] = &["key", "external"];

const HINT_DISTANCE: usize = 3;

/// Directives on object types and their fields must be known to federation
pub struct InvalidFederationDirectiveRule;

impl LintRule for InvalidFederationDirectiveRule {
    fn name(&self) -> &'static str {
        INVALID_DIRECTIVE_RULE
    }

    fn description(&self) -> &'static str {
        "Directives on types and fields are federation or built-in directives"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Federation
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for definition in &document.ast().definitions {
            let (type_name, directives, fields) = match definition {
                ast::Definition::ObjectTypeDefinition(d) => (&d.name, &d.directives, &d.fields),
                ast::Definition::ObjectTypeExtension(d) => (&d.name, &d.directives, &d.fields),
                _ => continue,
            };

            for directive in unknown_directives(directives) {
                let mut text =
                    format!("Unknown directive '@{}' on type '{type_name}'.", directive.name);
                if let Some(hint) = suggest_type_directive(directive.name.as_str()) {
                    text.push_str(&format!(" Did you mean '@{hint}'?"));
                }
                let line = document.line_of_node(directive, &format!("@{}", directive.name));
                diagnostics.push(document.diagnostic(line, self.name(), text));
            }

            for field in fields {
                for directive in unknown_directives(&field.directives) {
                    let line = document.line_of_node(directive, &format!("@{}", directive.name));
                    diagnostics.push(document.diagnostic(
                        line,
                        self.name(),
                        format!(
                            "Unknown directive '@{}' on field '{type_name}.{}'.",
                            directive.name, field.name
                        ),
                    ));
                }
            }
        }

        diagnostics
    }
}

fn unknown_directives(directives: &DirectiveList) -> impl Iterator<Item = &Node<ast::Directive>> {
    directives
        .iter()
        .filter(|directive| !ALLOWED_DIRECTIVES.contains(&directive.name.as_str()))
}

/// `@key` or `@external` when `name` looks like a slip of either
#[must_use]
pub fn suggest_type_directive(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();

    TYPE_DIRECTIVE_HINTS.iter().copied().find(|hint| {
        lowered.contains(hint)
            || (lowered.len() > 1 && hint.contains(lowered.as_str()))
            || levenshtein(&lowered, hint) <= HINT_DISTANCE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(schema: &str) -> Vec<Diagnostic> {
        InvalidFederationDirectiveRule.check(&SchemaDocument::parse("schema.graphql", schema))
    }

    #[test]
    fn test_federation_directives_are_allowed() {
        let diagnostics = check(
            r#"
type Product @key(fields: "id") @shareable {
  id: ID! @external
  name: String @requires(fields: "id") @tag(name: "public")
  legacy: String @deprecated(reason: "gone")
}

extend type Review @key(fields: "id") {
  id: ID!
}
"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_type_directive_with_hint() {
        let diagnostics = check("type Product @keys(fields: \"id\") {\n  id: ID!\n}\n");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "invalid-federation-directive: Unknown directive '@keys' on type 'Product'. Did you mean '@key'?"
        );
        assert_eq!(diagnostics[0].line, 1);
    }

    #[test]
    fn test_unknown_field_directive_has_no_hint() {
        let diagnostics = check("type Product {\n  id: ID!\n  price: Float @cacheControl(maxAge: 30)\n}\n");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].text(),
            "Unknown directive '@cacheControl' on field 'Product.price'."
        );
        assert_eq!(diagnostics[0].line, 3);
    }

    #[test]
    fn test_extension_directives_are_checked() {
        let diagnostics = check("extend type Product @weird {\n  id: ID!\n}\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'@weird' on type 'Product'"));
    }

    #[test]
    fn test_type_directive_hints() {
        assert_eq!(suggest_type_directive("primaryKey"), Some("key"));
        assert_eq!(suggest_type_directive("externl"), Some("external"));
        assert_eq!(suggest_type_directive("EXTERNAL"), Some("external"));
        assert_eq!(suggest_type_directive("cacheControl"), None);
    }
}
