/// Does `haystack` match `needle`?
///
/// Default mode is a case-insensitive substring test. `exact` mode is
/// case-sensitive and anchored at the start of `haystack`.
pub fn matches(haystack: &str, needle: &str, exact: bool) -> bool {
    if exact {
        haystack.starts_with(needle)
    } else {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// True when at least one of `fields` matches `needle`.
pub fn matches_any<'a, I>(fields: I, needle: &str, exact: bool) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .any(|field| matches(field, needle, exact))
}
