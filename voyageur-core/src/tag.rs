/// Normalizes user input into a sorted list of unique, lowercase tags.
pub fn prepare_tag_list<'a>(tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut tags: Vec<_> = tags
        .into_iter()
        .flat_map(str::split_whitespace)
        .filter_map(normalize_tag)
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}

/// Strips the reserved `#` character and lowercases a single tag.
pub fn normalize_tag(tag: &str) -> Option<String> {
    match tag.replace('#', "").trim() {
        t if t.is_empty() => None,
        t => Some(t.to_lowercase()),
    }
}
