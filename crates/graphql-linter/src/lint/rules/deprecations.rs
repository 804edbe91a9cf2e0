use crate::{Diagnostic, SchemaDocument};
use apollo_compiler::ast::DirectiveList;

use super::LintRule;

/// Deprecated enum values must be given a reason
pub struct DeprecationsHaveAReasonRule;

impl LintRule for DeprecationsHaveAReasonRule {
    fn name(&self) -> &'static str {
        "deprecations-have-a-reason"
    }

    fn description(&self) -> &'static str {
        "Deprecated enum values state a reason"
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for enum_def in document.enum_types() {
            for value in &enum_def.values {
                if has_bare_deprecation(&value.directives) {
                    let line = document.line_of_name(&value.value, value.value.as_str());
                    diagnostics.push(document.diagnostic(
                        line,
                        self.name(),
                        format!(
                            "Deprecated enum value '{}.{}' must have a reason.",
                            enum_def.name, value.value
                        ),
                    ));
                }
            }
        }

        diagnostics
    }
}

/// `@deprecated` applied without any argument
fn has_bare_deprecation(directives: &DirectiveList) -> bool {
    directives
        .iter()
        .any(|directive| directive.name.as_str() == "deprecated" && directive.arguments.is_empty())
}
