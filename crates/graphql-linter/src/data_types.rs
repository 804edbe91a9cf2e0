//! Type-reference and enum-value checks.
//!
//! Every field, argument and input field must name a built-in scalar or a
//! type defined (or extended) in the same file. Enum values are checked for
//! well-formed names and for digits that usually betray a copy/paste slip.

use crate::lint::LintRule;
use crate::text::levenshtein;
use crate::{source, Diagnostic, SchemaDocument};
use apollo_compiler::{ast, Node};
use std::collections::HashSet;

pub const UNDEFINED_TYPE_RULE: &str = "undefined-type";
pub const INVALID_ENUM_VALUE_RULE: &str = "invalid-enum-value";
pub const SUSPICIOUS_ENUM_VALUE_RULE: &str = "suspicious-enum-value";

const BUILT_IN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// Enum values that are known typos of a scalar name
const ENUM_CORRECTIONS: &[(&str, &str)] = &[
    ("STRING1", "STRING"),
    ("STRING2", "STRING"),
    ("INT1", "INT"),
    ("INT2", "INT"),
    ("INT32", "INT"),
    ("INT64", "INT"),
    ("FLOAT1", "FLOAT"),
    ("FLOAT2", "FLOAT"),
    ("BOOLEAN1", "BOOLEAN"),
    ("BOOL1", "BOOLEAN"),
    ("ID1", "ID"),
];

const STANDARD_ENUM_NAMES: &[&str] = &["STRING", "BOOLEAN", "FLOAT", "INT", "INTEGER", "ID"];

const SUGGESTION_DISTANCE: usize = 2;

/// The data-type validator, in the order it reports
pub fn data_type_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(UndefinedTypeRule),
        Box::new(InvalidEnumValueRule),
        Box::new(SuspiciousEnumValueRule),
    ]
}

/// Field, argument and input field types must resolve to a known name
pub struct UndefinedTypeRule;

impl LintRule for UndefinedTypeRule {
    fn name(&self) -> &'static str {
        UNDEFINED_TYPE_RULE
    }

    fn description(&self) -> &'static str {
        "Referenced types are built-in scalars or defined in the same schema"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let known: HashSet<&str> = BUILT_IN_SCALARS
            .iter()
            .copied()
            .chain(document.defined_type_names())
            .collect();

        let mut checker = TypeReferenceChecker {
            document,
            known: &known,
            rule: self.name(),
            diagnostics: Vec::new(),
        };

        for definition in &document.ast().definitions {
            match definition {
                ast::Definition::ObjectTypeDefinition(d) => checker.fields(d.name.as_str(), &d.fields),
                ast::Definition::ObjectTypeExtension(d) => checker.fields(d.name.as_str(), &d.fields),
                ast::Definition::InterfaceTypeDefinition(d) => checker.fields(d.name.as_str(), &d.fields),
                ast::Definition::InterfaceTypeExtension(d) => checker.fields(d.name.as_str(), &d.fields),
                ast::Definition::InputObjectTypeDefinition(d) => {
                    checker.input_values(d.name.as_str(), &d.fields);
                }
                ast::Definition::InputObjectTypeExtension(d) => {
                    checker.input_values(d.name.as_str(), &d.fields);
                }
                _ => {}
            }
        }

        checker.diagnostics
    }
}

struct TypeReferenceChecker<'a> {
    document: &'a SchemaDocument,
    known: &'a HashSet<&'a str>,
    rule: &'static str,
    diagnostics: Vec<Diagnostic>,
}

impl TypeReferenceChecker<'_> {
    fn fields(&mut self, owner: &str, fields: &[Node<ast::FieldDefinition>]) {
        for field in fields {
            self.reference(
                &format!("Field '{owner}.{}'", field.name),
                field.name.as_str(),
                &field.ty,
            );
            for argument in &field.arguments {
                self.reference(
                    &format!("Argument '{owner}.{}({}:)'", field.name, argument.name),
                    argument.name.as_str(),
                    &argument.ty,
                );
            }
        }
    }

    fn input_values(&mut self, owner: &str, values: &[Node<ast::InputValueDefinition>]) {
        for value in values {
            self.reference(
                &format!("Input field '{owner}.{}'", value.name),
                value.name.as_str(),
                &value.ty,
            );
        }
    }

    fn reference(&mut self, subject: &str, name: &str, ty: &ast::Type) {
        let base = ty.inner_named_type().as_str();
        if self.known.contains(base) {
            return;
        }

        let line = reference_line(self.document.source(), name, base);
        self.diagnostics.push(self.document.diagnostic(
            line,
            self.rule,
            format!("{subject} references undefined type '{base}'."),
        ));
    }
}

/// `name: Type` on the field's own line, then any `name: Type`, then any `name:`
fn reference_line(text: &str, name: &str, base: &str) -> usize {
    [
        source::line_of_field(text, name, base),
        source::line_of(text, &format!("{name}: {base}")),
        source::line_of(text, &format!("{name}:")),
    ]
    .into_iter()
    .find(|line| *line > 0)
    .unwrap_or(0)
}

/// Enum value names must be identifiers
pub struct InvalidEnumValueRule;

impl LintRule for InvalidEnumValueRule {
    fn name(&self) -> &'static str {
        INVALID_ENUM_VALUE_RULE
    }

    fn description(&self) -> &'static str {
        "Enum values start with a letter or underscore and contain only letters, digits and underscores"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        enum_values(document)
            .filter(|(_, value)| !is_valid_enum_value(value.value.as_str()))
            .map(|(owner, value)| {
                let line = document.line_of_name(&value.value, value.value.as_str());
                document.diagnostic(
                    line,
                    self.name(),
                    format!("Enum value '{owner}.{}' is not a valid identifier.", value.value),
                )
            })
            .collect()
    }
}

/// Enum values containing digits, with a suggested replacement when one is obvious
pub struct SuspiciousEnumValueRule;

impl LintRule for SuspiciousEnumValueRule {
    fn name(&self) -> &'static str {
        SUSPICIOUS_ENUM_VALUE_RULE
    }

    fn description(&self) -> &'static str {
        "Enum values do not contain digits"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        enum_values(document)
            .filter(|(_, value)| is_suspicious_enum_value(value.value.as_str()))
            .map(|(owner, value)| {
                let name = value.value.as_str();
                let text = match suggest_enum_value(name) {
                    Some(suggestion) => format!(
                        "Enum value '{owner}.{name}' contains a digit. Did you mean '{suggestion}'?"
                    ),
                    None => format!("Enum value '{owner}.{name}' contains a digit."),
                };
                let line = document.line_of_name(&value.value, name);
                document.diagnostic(line, self.name(), text).with_value(name)
            })
            .collect()
    }
}

fn enum_values(
    document: &SchemaDocument,
) -> impl Iterator<Item = (&str, &Node<ast::EnumValueDefinition>)> {
    document
        .ast()
        .definitions
        .iter()
        .filter_map(|def| match def {
            ast::Definition::EnumTypeDefinition(d) => Some((d.name.as_str(), d.values.as_slice())),
            ast::Definition::EnumTypeExtension(d) => Some((d.name.as_str(), d.values.as_slice())),
            _ => None,
        })
        .flat_map(|(owner, values)| values.iter().map(move |value| (owner, value)))
}

/// A letter or `_`, then letters, digits or `_`. Unicode letters and digits count.
#[must_use]
pub fn is_valid_enum_value(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[must_use]
pub fn is_suspicious_enum_value(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit())
}

/// Replacement for a suspicious enum value: the correction table first, then
/// the standard scalar names compared with the digits removed.
#[must_use]
pub fn suggest_enum_value(value: &str) -> Option<&'static str> {
    if let Some(&(_, correction)) = ENUM_CORRECTIONS.iter().find(|(typo, _)| *typo == value) {
        return Some(correction);
    }

    let stripped: String = value.chars().filter(|c| !c.is_ascii_digit()).collect();
    if let Some(&exact) = STANDARD_ENUM_NAMES.iter().find(|name| **name == stripped) {
        return Some(exact);
    }

    STANDARD_ENUM_NAMES
        .iter()
        .find(|name| levenshtein(&stripped, name) <= SUGGESTION_DISTANCE)
        .copied()
}
