//! Text lookups that map names back to lines of the original schema.
//!
//! All line numbers are 1-based; 0 means "not found".

/// Definition keywords tried, in order, by [`line_of_type`]
const TYPE_KEYWORDS: &[&str] = &["type ", "input ", "enum ", "interface ", "union ", "scalar "];

/// First line containing `literal`, or 0.
///
/// Matching is byte-exact and case-sensitive. An empty literal matches line 1.
#[must_use]
pub fn line_of(source: &str, literal: &str) -> usize {
    if literal.is_empty() {
        return 1;
    }

    source
        .lines()
        .position(|line| line.contains(literal))
        .map_or(0, |index| index + 1)
}

/// The n-th line with surrounding whitespace removed, or `""` when out of range
#[must_use]
pub fn line_content(source: &str, line: usize) -> &str {
    if line == 0 {
        return "";
    }

    source.lines().nth(line - 1).map_or("", str::trim)
}

/// Line of the definition of type `name`, trying each definition keyword
#[must_use]
pub fn line_of_type(source: &str, name: &str) -> usize {
    TYPE_KEYWORDS
        .iter()
        .map(|keyword| line_of(source, &format!("{keyword}{name}")))
        .find(|&line| line > 0)
        .unwrap_or(0)
}

/// Line declaring `field_name`, optionally with a type reference to `type_name`.
///
/// A candidate line must contain `field_name:`. When `type_name` is not
/// empty the line must also mention it as `T!`, `T]`, `[T`, `T ` or end with `T`.
#[must_use]
pub fn line_of_field(source: &str, field_name: &str, type_name: &str) -> usize {
    let field_marker = format!("{field_name}:");

    source
        .lines()
        .position(|line| {
            line.contains(&field_marker)
                && (type_name.is_empty() || mentions_type(line, type_name))
        })
        .map_or(0, |index| index + 1)
}

fn mentions_type(line: &str, type_name: &str) -> bool {
    line.contains(&format!("{type_name}!"))
        || line.contains(&format!("{type_name}]"))
        || line.contains(&format!("[{type_name}"))
        || line.trim_end().ends_with(type_name)
        || line.contains(&format!("{type_name} "))
}

fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Drop every line whose first non-whitespace content is `//`
#[must_use]
pub fn strip_comment_lines(source: &str) -> String {
    source
        .lines()
        .filter(|line| !is_comment_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Blank out comment lines, keeping every byte offset and line number intact
#[must_use]
pub fn mask_comment_lines(source: &str) -> String {
    source
        .split_inclusive('\n')
        .map(|line| {
            if is_comment_line(line) {
                let body = line.trim_end_matches(['\r', '\n']);
                let mut masked = " ".repeat(body.len());
                masked.push_str(&line[body.len()..]);
                masked
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Original 1-based line numbers of the lines [`strip_comment_lines`] keeps
#[must_use]
pub fn kept_line_numbers(source: &str) -> Vec<usize> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_comment_line(line))
        .map(|(index, _)| index + 1)
        .collect()
}
