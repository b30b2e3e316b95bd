//! Display title derivation.

/// Derive the README heading from the project directory name.
///
/// Uses the last path segment of `directory`, or `fallback_repo` when that
/// segment is empty. Underscores and hyphens become spaces and each
/// space-separated word gets an uppercase first character; the rest of the
/// word is left as is.
pub fn display_title(directory: &str, fallback_repo: &str) -> String {
    let segment = directory.rsplit(['/', '\\']).next().unwrap_or_default();
    let name = if segment.is_empty() {
        fallback_repo
    } else {
        segment
    };

    name.replace(['_', '-'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
