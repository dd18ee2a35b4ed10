/// Converts a string to a string suitable for use in an HTML attribute.
///
/// Every `/` and `-` is removed outright, so the result can serve as an
/// anchor id derived from a path or a hyphenated title.
pub fn myna_id(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '/' | '-')).collect()
}
