/// Returns `value` unless it is blank, in which case `fallback` is used.
pub fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback.to_string(),
    }
}
