use crate::discovery::discover_schema_files;
use crate::document::ParseErrorOrigin;
use crate::lint::{all_rule_ids, Linter, READ_FAILURE_RULE};
use crate::report::{FileReport, RunReport};
use crate::{Diagnostic, Result, SchemaDocument};
use graphql_linter_config::LinterConfig;
use std::path::Path;

/// Lint every schema file under `target`.
///
/// Files are linted one at a time in discovery order. A file that cannot be
/// read is reported with a `failed-to-read-schema-file` diagnostic and the
/// run continues.
///
/// # Errors
///
/// Returns an error when discovery fails or finds no schema files.
pub async fn lint_path(target: &Path, config: &LinterConfig) -> Result<RunReport> {
    let files = discover_schema_files(target)?;
    warn_suspicious_suppressions(config);

    let linter = Linter::new(config.settings);
    let mut report = RunReport::default();

    for path in files {
        let display_path = path.display().to_string();
        tracing::debug!(file = %display_path, "Linting schema file");

        let file_report = match tokio::fs::read_to_string(&path).await {
            Ok(source) => lint_with(&linter, config, &display_path, &source),
            Err(e) => {
                tracing::error!(file = %display_path, "Failed to read schema file: {e}");
                let diagnostic = Diagnostic::new(
                    display_path.as_str(),
                    0,
                    READ_FAILURE_RULE,
                    format!("Failed to read schema file: {e}"),
                );
                filter_suppressed(config, display_path, vec![diagnostic])
            }
        };

        report.push(file_report);
    }

    Ok(report)
}

/// Lint one schema held in memory
#[must_use]
pub fn lint_source(path: &str, source: &str, config: &LinterConfig) -> FileReport {
    let linter = Linter::new(config.settings);
    lint_with(&linter, config, path, source)
}

fn lint_with(linter: &Linter, config: &LinterConfig, path: &str, source: &str) -> FileReport {
    let document = SchemaDocument::parse(path, source);

    for error in document.parse_errors() {
        match error.origin {
            ParseErrorOrigin::External => {
                tracing::warn!(file = path, line = error.line, "Syntax error: {}", error.message);
            }
            ParseErrorOrigin::Internal => {
                tracing::warn!(file = path, "Internal parser error: {}", error.message);
            }
        }
    }

    filter_suppressed(config, path.to_string(), linter.lint(&document))
}

/// Drop every diagnostic a suppression entry covers
fn filter_suppressed(
    config: &LinterConfig,
    path: String,
    diagnostics: Vec<Diagnostic>,
) -> FileReport {
    let mut retained = Vec::with_capacity(diagnostics.len());
    let mut suppressed = 0;

    for diagnostic in diagnostics {
        let rule = diagnostic.rule_id();
        let value = diagnostic.suppression_value();
        match config.find_suppression(&diagnostic.file, diagnostic.line, rule, value) {
            Some(entry) => {
                tracing::debug!(
                    file = %diagnostic.file,
                    line = diagnostic.line,
                    rule,
                    value,
                    reason = %entry.reason,
                    "Suppressed diagnostic"
                );
                suppressed += 1;
            }
            None => retained.push(diagnostic),
        }
    }

    FileReport::new(path, retained, suppressed)
}

fn warn_suspicious_suppressions(config: &LinterConfig) {
    let known = all_rule_ids();
    for (index, suppression) in config.suppressions.iter().enumerate() {
        if suppression.is_unbounded() {
            tracing::warn!(
                entry = index + 1,
                reason = %suppression.reason,
                "Suppression has no file, line, rule or value and hides every diagnostic"
            );
        } else if !suppression.rule.is_empty() && !known.contains(&suppression.rule.as_str()) {
            tracing::warn!(
                rule = %suppression.rule,
                file = %suppression.file,
                "Suppression names an unknown rule"
            );
        }
    }
}
