/// Trim a user-supplied name, treating blank values as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolve an object field name: unset falls back to `default`, while an
/// explicitly blank name means "use the whole option".
pub(super) fn field_name(value: Option<String>, default: &str) -> Option<String> {
    match value {
        None => Some(default.to_string()),
        Some(value) => non_blank(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_unset() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" name ".into())), Some("name".into()));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn field_names_default_unless_blanked() {
        assert_eq!(field_name(None, "label"), Some("label".into()));
        assert_eq!(field_name(Some("".into()), "label"), None);
        assert_eq!(field_name(Some("title".into()), "label"), Some("title".into()));
    }
}
