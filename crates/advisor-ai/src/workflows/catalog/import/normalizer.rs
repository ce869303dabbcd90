pub(crate) fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Split a multi-value CSV cell on `;` or `|`, dropping empty entries.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split([';', '|'])
        .map(normalize_token)
        .filter(|entry| !entry.is_empty())
        .collect()
}
