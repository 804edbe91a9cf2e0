use serde::{Deserialize, Serialize};

/// Top-level linter configuration, read from `.graphql-linter.yml`.
///
/// Loaded once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinterConfig {
    /// Global switches
    pub settings: Settings,

    /// Diagnostics to ignore
    pub suppressions: Vec<Suppression>,
}

/// Global linter switches. Every switch is on unless turned off explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Run the opinionated convention rules (sorting, Relay)
    pub strict_mode: bool,

    /// Run the federation directive and composition checks
    pub validate_federation: bool,

    /// Run the description rules
    pub check_descriptions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_mode: true,
            validate_federation: true,
            check_descriptions: true,
        }
    }
}

/// A single suppression entry.
///
/// Empty fields (and `line: 0`) mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suppression {
    /// Path suffix of the schema file
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,

    /// 1-based line number, 0 matches every line
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,

    /// Rule id, e.g. `types-have-descriptions`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rule: String,

    /// Per-instance discriminator, e.g. the offending enum value
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Why the diagnostic is acceptable. Informational only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(line: &usize) -> bool {
    *line == 0
}

impl Suppression {
    /// Check whether this entry covers the given diagnostic coordinates.
    ///
    /// File paths are compared after turning backslashes into forward
    /// slashes; the entry's `file` must be a suffix of `file`.
    #[must_use]
    pub fn matches(&self, file: &str, line: usize, rule: &str, value: &str) -> bool {
        let file_matches =
            self.file.is_empty() || normalize_path(file).ends_with(&normalize_path(&self.file));
        let line_matches = self.line == 0 || self.line == line;
        let rule_matches = self.rule.is_empty() || self.rule == rule;
        let value_matches = self.value.is_empty() || self.value == value;

        file_matches && line_matches && rule_matches && value_matches
    }

    /// True when the entry has no selector at all and would hide everything
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.file.is_empty() && self.line == 0 && self.rule.is_empty() && self.value.is_empty()
    }
}

impl LinterConfig {
    /// First suppression entry covering the diagnostic, if any
    #[must_use]
    pub fn find_suppression(
        &self,
        file: &str,
        line: usize,
        rule: &str,
        value: &str,
    ) -> Option<&Suppression> {
        self.suppressions
            .iter()
            .find(|entry| entry.matches(file, line, rule, value))
    }

    /// Check whether a diagnostic is suppressed. Always false without entries.
    #[must_use]
    pub fn is_suppressed(&self, file: &str, line: usize, rule: &str, value: &str) -> bool {
        self.find_suppression(file, line, rule, value).is_some()
    }
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
