/// Derive the file-name slug for a title.
///
/// Lower-cases the title and joins its whitespace-separated words with `-`.
/// The transform is lossy; distinct titles may share a slug.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Best-effort inverse of [`slugify`]: hyphens become spaces.
pub fn unslugify(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
