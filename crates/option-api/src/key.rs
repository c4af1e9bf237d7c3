use std::fmt;

use serde::Serialize;

/// Identity of an option, derived through [`OptionAccessors::key`].
///
/// Text and integer keys never compare equal, so `"1"` and `1` identify two
/// different options.
///
/// [`OptionAccessors::key`]: crate::OptionAccessors::key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum OptionKey {
    Text(String),
    Int(i64),
}

impl OptionKey {
    /// Return the textual key, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for OptionKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for OptionKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_integer_keys_are_distinct() {
        assert_ne!(OptionKey::from("1"), OptionKey::from(1));
        assert_eq!(OptionKey::from("1").to_string(), OptionKey::from(1).to_string());
    }

    #[test]
    fn keys_serialize_as_plain_values() {
        let json = serde_json::to_string(&vec![OptionKey::from("a"), OptionKey::from(7)])
            .expect("serialize keys");
        assert_eq!(json, r#"["a",7]"#);
    }
}
