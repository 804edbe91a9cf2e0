use crate::{Diagnostic, SchemaDocument};

use super::{LintRule, RuleGroup};

const CONNECTION_SUFFIX: &str = "Connection";
const CONNECTION_FIELDS: &[&str] = &["pageInfo", "edges"];

/// The schema must define a Relay `PageInfo` type
pub struct RelayPageInfoRule;

impl LintRule for RelayPageInfoRule {
    fn name(&self) -> &'static str {
        "relay-page-info-spec"
    }

    fn description(&self) -> &'static str {
        "A PageInfo object type is defined"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Convention
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        if document
            .object_types()
            .any(|obj| obj.name.as_str() == "PageInfo")
        {
            return Vec::new();
        }

        vec![document.diagnostic(
            1,
            self.name(),
            "A `PageInfo` object type is required as per the Relay spec.",
        )]
    }
}

/// `*Connection` types must expose `pageInfo` and `edges`
pub struct RelayConnectionTypesRule;

impl LintRule for RelayConnectionTypesRule {
    fn name(&self) -> &'static str {
        "relay-connection-types-spec"
    }

    fn description(&self) -> &'static str {
        "Connection types have pageInfo and edges fields"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Convention
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for obj in document
            .object_types()
            .filter(|obj| obj.name.as_str().ends_with(CONNECTION_SUFFIX))
        {
            let line = document.line_of_name(&obj.name, &format!("type {}", obj.name));
            for required in CONNECTION_FIELDS {
                if obj.fields.iter().any(|f| f.name.as_str() == *required) {
                    continue;
                }
                diagnostics.push(document.diagnostic(
                    line,
                    self.name(),
                    format!(
                        "Connection type '{}' must have a '{required}' field as per the Relay spec.",
                        obj.name
                    ),
                ));
            }
        }

        diagnostics
    }
}

/// Fields returning a connection must accept forward or backward pagination arguments
pub struct RelayConnectionArgumentsRule;

impl LintRule for RelayConnectionArgumentsRule {
    fn name(&self) -> &'static str {
        "relay-connection-arguments-spec"
    }

    fn description(&self) -> &'static str {
        "Connection fields take first/after or last/before arguments"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Convention
    }

    fn check(&self, document: &SchemaDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let field_lists = document.object_fields().chain(
            document
                .interface_types()
                .map(|iface| (&iface.name, iface.fields.as_slice())),
        );

        for (type_name, fields) in field_lists {
            for field in fields {
                if !field.ty.inner_named_type().as_str().ends_with(CONNECTION_SUFFIX) {
                    continue;
                }

                let has_arg = |name: &str| field.arguments.iter().any(|a| a.name.as_str() == name);
                let forward = has_arg("first") && has_arg("after");
                let backward = has_arg("last") && has_arg("before");
                if forward || backward {
                    continue;
                }

                let line = document.line_of_name(&field.name, &format!("{}:", field.name));
                diagnostics.push(document.diagnostic(
                    line,
                    self.name(),
                    format!(
                        "Field '{type_name}.{}' returns a connection and must accept forward pagination \
                         arguments (first, after) or backward pagination arguments (last, before).",
                        field.name
                    ),
                ));
            }
        }

        diagnostics
    }
}
