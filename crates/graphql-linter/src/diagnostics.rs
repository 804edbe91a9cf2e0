use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the lint report.
///
/// The message always starts with the rule id, e.g.
/// `types-have-descriptions: Type 'User' is missing a description.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Path of the schema file, as discovered
    pub file: String,

    /// 1-based line number, 0 when the location is unknown
    pub line: usize,

    /// `<rule-id>: <free text>`
    pub message: String,

    /// The trimmed source line the diagnostic points at
    pub line_content: String,

    /// Per-instance discriminator used when matching suppressions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Diagnostic {
    pub fn new(
        file: impl Into<String>,
        line: usize,
        rule: &str,
        text: impl fmt::Display,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            message: format!("{rule}: {text}"),
            line_content: String::new(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_line_content(mut self, content: impl Into<String>) -> Self {
        self.line_content = content.into();
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The rule id this diagnostic was produced by
    #[must_use]
    pub fn rule_id(&self) -> &str {
        rule_id(&self.message)
    }

    /// The message without its rule id prefix
    #[must_use]
    pub fn text(&self) -> &str {
        self.message
            .split_once(": ")
            .map_or(self.message.as_str(), |(_, text)| text)
    }

    /// Value compared against `Suppression::value`, empty when the rule has none
    #[must_use]
    pub fn suppression_value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}\n  {}",
            self.file, self.line, self.message, self.line_content
        )
    }
}

/// Extract the rule id from a diagnostic message.
///
/// The id is the text before the first `:`, or before the first space when
/// the message has no colon.
#[must_use]
pub fn rule_id(message: &str) -> &str {
    if let Some((id, _)) = message.split_once(':') {
        return id;
    }
    message
        .split_once(' ')
        .map_or(message, |(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_prefixed_with_rule() {
        let diag = Diagnostic::new("s.graphql", 3, "types-have-descriptions", "Missing.");
        assert_eq!(diag.message, "types-have-descriptions: Missing.");
        assert_eq!(diag.rule_id(), "types-have-descriptions");
        assert_eq!(diag.text(), "Missing.");
    }

    #[test]
    fn test_rule_id_without_colon() {
        assert_eq!(rule_id("failed-to-read-schema-file could not open"), "failed-to-read-schema-file");
        assert_eq!(rule_id("single-token"), "single-token");
        assert_eq!(rule_id("a: b: c"), "a");
    }

    #[test]
    fn test_display_format() {
        let diag = Diagnostic::new("s.graphql", 2, "relay-page-info-spec", "Missing PageInfo.")
            .with_line_content("type Query {");
        assert_eq!(
            diag.to_string(),
            "s.graphql:2: relay-page-info-spec: Missing PageInfo.\n  type Query {"
        );
    }

    #[test]
    fn test_suppression_value() {
        let plain = Diagnostic::new("s.graphql", 1, "x", "y");
        assert_eq!(plain.suppression_value(), "");

        let valued = plain.with_value("INACTIVE1");
        assert_eq!(valued.suppression_value(), "INACTIVE1");
    }
}
