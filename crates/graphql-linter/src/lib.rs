//! Lint GraphQL SDL files against the `graphql-schema-linter` rule set, with
//! Apollo Federation directives understood.

mod diagnostics;
mod discovery;
mod document;
mod error;
mod line_index;
mod report;
mod runner;

pub mod data_types;
pub mod federation;
pub mod lint;
pub mod source;
pub mod text;

pub use diagnostics::{rule_id, Diagnostic};
pub use discovery::{discover_schema_files, is_schema_file};
pub use document::{ParseError, ParseErrorOrigin, SchemaDocument, SYNTAX_ERROR_RULE};
pub use error::{LintError, Result};
pub use line_index::LineIndex;
pub use lint::{all_rule_ids, rule_catalogue, LintRule, Linter, RuleGroup, READ_FAILURE_RULE};
pub use report::{format_percentage, ErrorKind, FileReport, RunReport, RunSummary};
pub use runner::{lint_path, lint_source};

// Re-export the configuration types every caller needs
pub use graphql_linter_config::{LinterConfig, Settings, Suppression};
