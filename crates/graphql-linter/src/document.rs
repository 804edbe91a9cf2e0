use crate::line_index::LineIndex;
use crate::source;
use crate::Diagnostic;
use apollo_compiler::ast;
use apollo_compiler::parser::SourceSpan;
use apollo_compiler::{Name, Node};

/// Rule id used for syntax errors reported by the parser
pub const SYNTAX_ERROR_RULE: &str = "graphql-syntax-error";

/// Where a parse error originates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorOrigin {
    /// The error points into the schema text
    External,
    /// The parser reported it without a source location
    Internal,
}

/// A syntax error reported while parsing a schema file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// 1-based line, 0 when the parser gave no location
    pub line: usize,
    pub origin: ParseErrorOrigin,
}

/// A parsed schema file: the unit of linting.
///
/// Holds the original text for line lookups, the AST (possibly partial when
/// the text has syntax errors) and the parser's error report. Lines starting
/// with `//` are blanked before parsing, so AST offsets still point into the
/// original text.
#[derive(Debug)]
pub struct SchemaDocument {
    path: String,
    source: String,
    ast: ast::Document,
    parse_errors: Vec<ParseError>,
    line_index: LineIndex,
}

impl SchemaDocument {
    /// Parse SDL text. Never fails: syntax errors are kept in [`Self::parse_errors`].
    pub fn parse(path: impl Into<String>, source: impl Into<String>) -> Self {
        let path = path.into();
        let source = source.into();
        let line_index = LineIndex::new(&source);
        let parsed_text = source::mask_comment_lines(&source);

        let (ast, parse_errors) = match ast::Document::parse(parsed_text, path.as_str()) {
            Ok(doc) => (doc, Vec::new()),
            Err(with_errors) => {
                let errors = with_errors
                    .errors
                    .iter()
                    .map(|diag| {
                        let line = diag.line_column_range().map_or(0, |range| range.start.line);
                        ParseError {
                            message: diag.error.to_string(),
                            line,
                            origin: if line > 0 {
                                ParseErrorOrigin::External
                            } else {
                                ParseErrorOrigin::Internal
                            },
                        }
                    })
                    .collect();
                (with_errors.partial, errors)
            }
        };

        Self {
            path,
            source,
            ast,
            parse_errors,
            line_index,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn ast(&self) -> &ast::Document {
        &self.ast
    }

    #[must_use]
    pub fn parse_errors(&self) -> &[ParseError] {
        &self.parse_errors
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Line of a source span, if the parser recorded one
    #[must_use]
    pub fn line_of_span(&self, span: Option<SourceSpan>) -> Option<usize> {
        span.map(|span| self.line_index.line_of_offset(span.offset()))
    }

    /// Line where `name` appears, falling back to a text search for `fallback`
    #[must_use]
    pub fn line_of_name(&self, name: &Name, fallback: &str) -> usize {
        self.line_of_span(name.location())
            .unwrap_or_else(|| source::line_of(&self.source, fallback))
    }

    /// Line where a node starts, falling back to a text search for `fallback`
    #[must_use]
    pub fn line_of_node<T>(&self, node: &Node<T>, fallback: &str) -> usize {
        self.line_of_span(node.location())
            .unwrap_or_else(|| source::line_of(&self.source, fallback))
    }

    /// Build a diagnostic for this file, filling in the line content
    #[must_use]
    pub fn diagnostic(&self, line: usize, rule: &str, text: impl std::fmt::Display) -> Diagnostic {
        Diagnostic::new(self.path.as_str(), line, rule, text)
            .with_line_content(source::line_content(&self.source, line))
    }

    /// Diagnostics for every syntax error
    #[must_use]
    pub fn syntax_diagnostics(&self) -> Vec<Diagnostic> {
        self.parse_errors
            .iter()
            .map(|error| self.diagnostic(error.line, SYNTAX_ERROR_RULE, &error.message))
            .collect()
    }

    /// Object type definitions, in document order
    pub fn object_types(&self) -> impl Iterator<Item = &Node<ast::ObjectTypeDefinition>> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::ObjectTypeDefinition(obj) => Some(obj),
            _ => None,
        })
    }

    /// Object type extensions (`extend type ...`), in document order
    pub fn object_type_extensions(
        &self,
    ) -> impl Iterator<Item = &Node<ast::ObjectTypeExtension>> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::ObjectTypeExtension(ext) => Some(ext),
            _ => None,
        })
    }

    pub fn interface_types(&self) -> impl Iterator<Item = &Node<ast::InterfaceTypeDefinition>> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::InterfaceTypeDefinition(iface) => Some(iface),
            _ => None,
        })
    }

    pub fn input_types(&self) -> impl Iterator<Item = &Node<ast::InputObjectTypeDefinition>> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::InputObjectTypeDefinition(input) => Some(input),
            _ => None,
        })
    }

    pub fn enum_types(&self) -> impl Iterator<Item = &Node<ast::EnumTypeDefinition>> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::EnumTypeDefinition(enum_def) => Some(enum_def),
            _ => None,
        })
    }

    pub fn union_types(&self) -> impl Iterator<Item = &Node<ast::UnionTypeDefinition>> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::UnionTypeDefinition(union_def) => Some(union_def),
            _ => None,
        })
    }

    /// Every field list on object types and their extensions, paired with the type name
    pub fn object_fields(
        &self,
    ) -> impl Iterator<Item = (&Name, &[Node<ast::FieldDefinition>])> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::ObjectTypeDefinition(obj) => Some((&obj.name, obj.fields.as_slice())),
            ast::Definition::ObjectTypeExtension(ext) => Some((&ext.name, ext.fields.as_slice())),
            _ => None,
        })
    }

    /// Names of every type defined or extended in this document
    #[must_use]
    pub fn defined_type_names(&self) -> Vec<&str> {
        self.ast
            .definitions
            .iter()
            .filter_map(|def| match def {
                ast::Definition::ObjectTypeDefinition(d) => Some(d.name.as_str()),
                ast::Definition::InterfaceTypeDefinition(d) => Some(d.name.as_str()),
                ast::Definition::InputObjectTypeDefinition(d) => Some(d.name.as_str()),
                ast::Definition::EnumTypeDefinition(d) => Some(d.name.as_str()),
                ast::Definition::UnionTypeDefinition(d) => Some(d.name.as_str()),
                ast::Definition::ScalarTypeDefinition(d) => Some(d.name.as_str()),
                ast::Definition::ObjectTypeExtension(d) => Some(d.name.as_str()),
                ast::Definition::InterfaceTypeExtension(d) => Some(d.name.as_str()),
                ast::Definition::InputObjectTypeExtension(d) => Some(d.name.as_str()),
                ast::Definition::EnumTypeExtension(d) => Some(d.name.as_str()),
                ast::Definition::UnionTypeExtension(d) => Some(d.name.as_str()),
                ast::Definition::ScalarTypeExtension(d) => Some(d.name.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_schema() {
        let doc = SchemaDocument::parse(
            "schema.graphql",
            "type Query {\n  user: User\n}\n\ntype User {\n  id: ID\n}\n",
        );

        assert!(doc.parse_errors().is_empty());
        assert_eq!(doc.object_types().count(), 2);
        assert_eq!(doc.defined_type_names(), vec!["Query", "User"]);

        let user = doc.object_types().nth(1).unwrap();
        assert_eq!(doc.line_of_name(&user.name, "type User"), 5);
    }

    #[test]
    fn test_parse_errors_keep_partial_document() {
        let doc = SchemaDocument::parse("broken.graphql", "type Query {\n  id: ID\n}\n\ntype {");

        assert!(!doc.parse_errors().is_empty());
        assert!(doc.object_types().any(|obj| obj.name.as_str() == "Query"));

        let diagnostics = doc.syntax_diagnostics();
        assert_eq!(diagnostics.len(), doc.parse_errors().len());
        assert!(diagnostics.iter().all(|d| d.rule_id() == SYNTAX_ERROR_RULE));
    }

    #[test]
    fn test_object_fields_include_extensions() {
        let doc = SchemaDocument::parse(
            "schema.graphql",
            "type Query { a: Int }\nextend type Query { b: Int }",
        );
        let fields: Vec<_> = doc
            .object_fields()
            .flat_map(|(_, fields)| fields.iter().map(|f| f.name.as_str()))
            .collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_diagnostic_fills_line_content() {
        let doc = SchemaDocument::parse("schema.graphql", "type Query {\n  id: ID\n}");
        let diag = doc.diagnostic(2, "rule-x", "text");
        assert_eq!(diag.file, "schema.graphql");
        assert_eq!(diag.line_content, "id: ID");
        assert_eq!(diag.message, "rule-x: text");
    }

    #[test]
    fn test_comment_lines_are_not_syntax_errors() {
        let doc = SchemaDocument::parse(
            "schema.graphql",
            "// owned by the catalog team\ntype Query {\n  // legacy\n  id: ID\n}\n",
        );

        assert!(doc.parse_errors().is_empty());
        let query = doc.object_types().next().unwrap();
        assert_eq!(doc.line_of_name(&query.name, "type Query"), 2);
        assert_eq!(doc.line_of_name(&query.fields[0].name, "id:"), 4);
        assert_eq!(doc.source().lines().next(), Some("// owned by the catalog team"));
    }
}
