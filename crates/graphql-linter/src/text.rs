//! Small string predicates shared by the rules.

/// Non-empty, no underscore, first byte in `a..=z`
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    !name.contains('_') && name.as_bytes().first().is_some_and(u8::is_ascii_lowercase)
}

/// First non-whitespace character is an uppercase letter.
///
/// Blank descriptions are treated as capitalized.
#[must_use]
pub fn is_capitalized(description: &str) -> bool {
    description
        .trim()
        .chars()
        .next()
        .map_or(true, char::is_uppercase)
}

/// Edit distance with unit cost for insert, delete and substitute
#[must_use]
pub fn levenshtein(source: &str, target: &str) -> usize {
    strsim::levenshtein(source, target)
}

/// Items joined for an "Expected sorting" message
pub(crate) fn expected_sorting<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut sorted: Vec<&str> = names.into_iter().collect();
    sorted.sort_unstable();
    sorted.join(", ")
}

/// Index of the first element that is out of lexicographic order, if any
pub(crate) fn first_unsorted(names: &[&str]) -> Option<usize> {
    if names.len() < 2 {
        return None;
    }

    let mut sorted = names.to_vec();
    sorted.sort_unstable();
    names.iter().zip(&sorted).position(|(seen, expected)| seen != expected)
}
