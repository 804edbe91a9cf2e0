use crate::lint::{LintRule, RuleGroup};
use crate::line_index::LineIndex;
use crate::{source, Diagnostic, SchemaDocument};
use apollo_compiler::ast;
use apollo_compiler::Node;
use apollo_parser::cst;
use apollo_parser::Parser;
use std::collections::{HashMap, HashSet};

pub const COMPOSITION_RULE: &str = "federation-composition";

/// A reason the schema would not compose, located in the text that was checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionError {
    /// 1-based line in the checked text, 0 when unknown
    pub line: usize,
    pub message: String,
}

/// Whether a (comment-stripped) schema composes as a federation subgraph
#[must_use]
pub fn validate_federation_schema(source: &str) -> bool {
    composition_errors(source).is_empty()
}

/// Every reason `source` fails to compose
#[must_use]
pub fn composition_errors(source: &str) -> Vec<CompositionError> {
    let document = match ast::Document::parse(source, "subgraph.graphql") {
        Ok(document) => document,
        Err(with_errors) => {
            return with_errors
                .errors
                .iter()
                .map(|diag| CompositionError {
                    line: diag.line_column_range().map_or(0, |range| range.start.line),
                    message: format!("Schema could not be parsed: {}", diag.error),
                })
                .collect();
        }
    };

    let index = LineIndex::new(source);
    let declared = declared_fields(&document);
    let mut checker = CompositionChecker {
        index: &index,
        declared: &declared,
        errors: Vec::new(),
    };

    for definition in &document.definitions {
        let (type_name, directives, fields) = match definition {
            ast::Definition::ObjectTypeDefinition(d) => (&d.name, &d.directives, &d.fields),
            ast::Definition::ObjectTypeExtension(d) => (&d.name, &d.directives, &d.fields),
            ast::Definition::InterfaceTypeDefinition(d) => (&d.name, &d.directives, &d.fields),
            ast::Definition::InterfaceTypeExtension(d) => (&d.name, &d.directives, &d.fields),
            _ => continue,
        };

        for directive in directives.iter().filter(|d| d.name.as_str() == "key") {
            checker.key(type_name.as_str(), directive);
        }

        for field in fields {
            for directive in &field.directives {
                match directive.name.as_str() {
                    "requires" | "provides" => {
                        checker.field_set_directive(type_name.as_str(), field, directive);
                    }
                    "override" => checker.override_directive(type_name.as_str(), field, directive),
                    _ => {}
                }
            }
        }
    }

    checker.errors
}

/// Fields each object or interface declares across its definition and extensions
fn declared_fields(document: &ast::Document) -> HashMap<&str, HashSet<&str>> {
    let mut declared: HashMap<&str, HashSet<&str>> = HashMap::new();

    for definition in &document.definitions {
        let (name, fields) = match definition {
            ast::Definition::ObjectTypeDefinition(d) => (&d.name, &d.fields),
            ast::Definition::ObjectTypeExtension(d) => (&d.name, &d.fields),
            ast::Definition::InterfaceTypeDefinition(d) => (&d.name, &d.fields),
            ast::Definition::InterfaceTypeExtension(d) => (&d.name, &d.fields),
            _ => continue,
        };
        declared
            .entry(name.as_str())
            .or_default()
            .extend(fields.iter().map(|field| field.name.as_str()));
    }

    declared
}

struct CompositionChecker<'a> {
    index: &'a LineIndex,
    declared: &'a HashMap<&'a str, HashSet<&'a str>>,
    errors: Vec<CompositionError>,
}

impl CompositionChecker<'_> {
    fn key(&mut self, type_name: &str, directive: &Node<ast::Directive>) {
        let Some(fields) = string_argument(directive, "fields") else {
            self.error(
                directive,
                format!("@key on '{type_name}' must have a string 'fields' argument."),
            );
            return;
        };

        let selected = match parse_field_set(fields) {
            Ok(selected) if !selected.is_empty() => selected,
            Ok(_) => {
                self.error(directive, format!("@key on '{type_name}' selects no fields."));
                return;
            }
            Err(message) => {
                self.error(
                    directive,
                    format!("@key on '{type_name}' has an invalid field set \"{fields}\": {message}"),
                );
                return;
            }
        };

        let declared = self.declared.get(type_name);
        let missing: Vec<String> = selected
            .into_iter()
            .filter(|name| declared.map_or(true, |fields| !fields.contains(name.as_str())))
            .collect();

        for name in missing {
            self.error(
                directive,
                format!("@key on '{type_name}' selects '{name}', which '{type_name}' does not declare."),
            );
        }
    }

    fn field_set_directive(
        &mut self,
        type_name: &str,
        field: &ast::FieldDefinition,
        directive: &Node<ast::Directive>,
    ) {
        let subject = format!("@{} on '{type_name}.{}'", directive.name, field.name);

        match string_argument(directive, "fields").map(parse_field_set) {
            None => self.error(directive, format!("{subject} must have a string 'fields' argument.")),
            Some(Ok(selected)) if selected.is_empty() => {
                self.error(directive, format!("{subject} has an empty field set."));
            }
            Some(Ok(_)) => {}
            Some(Err(message)) => {
                self.error(directive, format!("{subject} has an invalid field set: {message}"));
            }
        }
    }

    fn override_directive(
        &mut self,
        type_name: &str,
        field: &ast::FieldDefinition,
        directive: &Node<ast::Directive>,
    ) {
        let from = string_argument(directive, "from").map(str::trim);
        if from.map_or(true, str::is_empty) {
            self.error(
                directive,
                format!(
                    "@override on '{type_name}.{}' must name the subgraph it overrides with 'from'.",
                    field.name
                ),
            );
        }
    }

    fn error(&mut self, directive: &Node<ast::Directive>, message: String) {
        let line = directive
            .location()
            .map_or(0, |span| self.index.line_of_offset(span.offset()));
        self.errors.push(CompositionError { line, message });
    }
}

fn string_argument<'a>(directive: &'a ast::Directive, name: &str) -> Option<&'a str> {
    directive
        .arguments
        .iter()
        .find(|argument| argument.name.as_str() == name)
        .and_then(|argument| argument.value.as_str())
}

/// Top-level field names of a federation field set such as `"id sku { upc }"`
fn parse_field_set(fields: &str) -> Result<Vec<String>, String> {
    if fields.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tree = Parser::new(fields).parse_selection_set();

    if let Some(error) = tree.errors().next() {
        return Err(error.message().to_string());
    }

    Ok(tree
        .field_set()
        .selections()
        .filter_map(|selection| match selection {
            cst::Selection::Field(field) => field.name(),
            _ => None,
        })
        .map(|name| name.text().to_string())
        .collect())
}

/// Runs the composition check on the comment-stripped text of a schema file
pub struct FederationCompositionRule;

impl LintRule for FederationCompositionRule {
    fn name(&self) -> &'static str {
        COMPOSITION_RULE
    }

    fn description(&self) -> &'static str {
        "The schema composes as a federation subgraph"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Federation
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let stripped = source::strip_comment_lines(document.source());
        let original_lines = source::kept_line_numbers(document.source());

        composition_errors(&stripped)
            .into_iter()
            .map(|error| {
                let line = error
                    .line
                    .checked_sub(1)
                    .and_then(|index| original_lines.get(index))
                    .copied()
                    .unwrap_or(0);
                document.diagnostic(line, self.name(), error.message)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_subgraph() {
        let schema = r#"
type Product @key(fields: "id sku") {
  id: ID!
  sku: String
  weight: Float @external
  shippingEstimate: Float @requires(fields: "weight")
  price: Float @override(from: "legacy")
}
"#;
        assert!(validate_federation_schema(schema));
    }

    #[test]
    fn test_key_fields_may_come_from_extension() {
        let schema = r#"
type Product @key(fields: "upc") {
  name: String
}

extend type Product {
  upc: ID!
}
"#;
        assert_eq!(composition_errors(schema), Vec::new());
    }

    #[test]
    fn test_key_selecting_unknown_field() {
        let errors = composition_errors("type Product @key(fields: \"upc\") {\n  id: ID!\n}\n");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
        assert!(errors[0].message.contains("selects 'upc'"));
    }

    #[test]
    fn test_key_without_fields() {
        let errors = composition_errors("type Product @key {\n  id: ID!\n}\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("string 'fields' argument"));
    }

    #[test]
    fn test_requires_with_empty_field_set() {
        let errors = composition_errors(
            "type Product @key(fields: \"id\") {\n  id: ID!\n  total: Float @requires(fields: \"\")\n}\n",
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 3);
        assert!(errors[0].message.contains("empty field set"));
    }

    #[test]
    fn test_override_without_from() {
        let errors = composition_errors("type Product {\n  id: ID! @override(from: \"  \")\n}\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("@override on 'Product.id'"));
    }

    #[test]
    fn test_syntax_error_fails_composition() {
        assert!(!validate_federation_schema("type Product {"));
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let document = SchemaDocument::parse(
            "schema.graphql",
            "// owned by the catalog team\ntype Product @key(fields: \"upc\") {\n  id: ID!\n}\n",
        );
        let diagnostics = FederationCompositionRule.check(&document);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id(), COMPOSITION_RULE);
        assert_eq!(diagnostics[0].line, 2);
    }
}
