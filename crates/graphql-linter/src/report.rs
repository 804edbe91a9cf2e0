use crate::data_types::{INVALID_ENUM_VALUE_RULE, SUSPICIOUS_ENUM_VALUE_RULE, UNDEFINED_TYPE_RULE};
use crate::federation::{COMPOSITION_RULE, INVALID_DIRECTIVE_RULE};
use crate::Diagnostic;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const DEPRECATION_RULE: &str = "deprecations-have-a-reason";

/// How a retained diagnostic contributes to its file's error count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rule catalogue, syntax and read failures: one error each
    Rule,
    /// Data-type validator: one error each
    DataType,
    /// Missing deprecation reasons: one error per file, however many
    Deprecation,
    /// Directive and composition failures: one error per file, however many
    Federation,
}

impl ErrorKind {
    #[must_use]
    pub fn of(rule_id: &str) -> Self {
        match rule_id {
            DEPRECATION_RULE => Self::Deprecation,
            UNDEFINED_TYPE_RULE | INVALID_ENUM_VALUE_RULE | SUSPICIOUS_ENUM_VALUE_RULE => {
                Self::DataType
            }
            INVALID_DIRECTIVE_RULE | COMPOSITION_RULE => Self::Federation,
            _ => Self::Rule,
        }
    }
}

/// Outcome of linting one schema file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,

    /// Diagnostics that survived suppression, in report order
    pub diagnostics: Vec<Diagnostic>,

    /// Number of diagnostics hidden by a suppression entry
    pub suppressed: usize,

    pub error_count: usize,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<String>, diagnostics: Vec<Diagnostic>, suppressed: usize) -> Self {
        let error_count = count_errors(&diagnostics);
        Self {
            path: path.into(),
            diagnostics,
            suppressed,
            error_count,
        }
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Per-file error count: one per rule or data-type diagnostic, plus one if any
/// deprecation diagnostic remains, plus one if any federation diagnostic remains
fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    let mut count = 0;
    let mut deprecation = false;
    let mut federation = false;

    for diagnostic in diagnostics {
        match ErrorKind::of(diagnostic.rule_id()) {
            ErrorKind::Rule | ErrorKind::DataType => count += 1,
            ErrorKind::Deprecation => deprecation = true,
            ErrorKind::Federation => federation = true,
        }
    }

    count + usize::from(deprecation) + usize::from(federation)
}

/// Aggregate over every file of a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

/// Run totals, as printed at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_files: usize,
    pub passed_files: usize,
    pub files_with_at_least_one_error: usize,
    pub total_errors: usize,
    pub percent_passed: String,
    pub percentage_files_with_errors: String,
    pub error_type_summary: BTreeMap<String, usize>,
}

impl RunReport {
    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    /// Every retained diagnostic, file by file
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|file| file.diagnostics.iter())
    }

    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn files_with_errors(&self) -> usize {
        self.files.iter().filter(|file| file.has_errors()).count()
    }

    #[must_use]
    pub fn passed_files(&self) -> usize {
        self.total_files() - self.files_with_errors()
    }

    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|file| file.error_count).sum()
    }

    #[must_use]
    pub fn total_suppressed(&self) -> usize {
        self.files.iter().map(|file| file.suppressed).sum()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.total_errors() == 0
    }

    #[must_use]
    pub fn percent_passed(&self) -> f64 {
        percentage(self.passed_files(), self.total_files())
    }

    #[must_use]
    pub fn percentage_files_with_errors(&self) -> f64 {
        percentage(self.files_with_errors(), self.total_files())
    }

    /// Retained diagnostics counted by rule id, sorted by rule id
    #[must_use]
    pub fn error_type_summary(&self) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for diagnostic in self.diagnostics() {
            *summary.entry(diagnostic.rule_id().to_string()).or_insert(0) += 1;
        }
        summary
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total_files: self.total_files(),
            passed_files: self.passed_files(),
            files_with_at_least_one_error: self.files_with_errors(),
            total_errors: self.total_errors(),
            percent_passed: format_percentage(self.percent_passed()),
            percentage_files_with_errors: format_percentage(self.percentage_files_with_errors()),
            error_type_summary: self.error_type_summary(),
        }
    }

    /// The `Error type summary:` block, one indented line per rule id
    #[must_use]
    pub fn render_error_type_summary(&self) -> String {
        let mut out = String::from("Error type summary:\n");
        for (rule, count) in self.error_type_summary() {
            let _ = writeln!(out, "  {rule}: {count}");
        }
        out
    }

    /// Plain-text report: diagnostics, the error type summary, then the totals
    #[must_use]
    pub fn render_human(&self) -> String {
        let mut out = String::new();

        for diagnostic in self.diagnostics() {
            let _ = writeln!(out, "{diagnostic}");
        }
        out.push_str(&self.render_error_type_summary());

        let summary = self.summary();
        let _ = writeln!(
            out,
            "passedFiles: {}, totalFiles: {}, percentPassed: {}",
            summary.passed_files, summary.total_files, summary.percent_passed
        );

        if summary.total_errors > 0 {
            let _ = writeln!(
                out,
                "filesWithAtLeastOneError: {}, percentageFilesWithErrors: {}",
                summary.files_with_at_least_one_error, summary.percentage_files_with_errors
            );
            let _ = writeln!(out, "totalErrors: {}", summary.total_errors);
        } else {
            let _ = writeln!(
                out,
                "All {} schema file(s) passed linting successfully!",
                summary.total_files
            );
        }

        out
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Two decimal places and a trailing `%`
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}
