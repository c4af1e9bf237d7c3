use std::fmt;
use std::sync::Arc;

use crate::key::OptionKey;

type LabelFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type KeyFn<T> = Arc<dyn Fn(&T) -> OptionKey + Send + Sync>;
type DisabledFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Pure functions that extract what the core needs from an option value.
///
/// Options are never compared structurally: two options are the same option
/// exactly when [`key`](Self::key) returns equal keys.
pub struct OptionAccessors<T> {
    label: LabelFn<T>,
    key: KeyFn<T>,
    disabled: Option<DisabledFn<T>>,
}

impl<T> OptionAccessors<T> {
    /// Create accessors from a label and a value-key function.
    pub fn new<L, K>(label: L, key: K) -> Self
    where
        L: Fn(&T) -> String + Send + Sync + 'static,
        K: Fn(&T) -> OptionKey + Send + Sync + 'static,
    {
        Self {
            label: Arc::new(label),
            key: Arc::new(key),
            disabled: None,
        }
    }

    /// Mark options for which `predicate` returns `true` as disabled.
    #[must_use]
    pub fn with_disabled<D>(mut self, predicate: D) -> Self
    where
        D: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.disabled = Some(Arc::new(predicate));
        self
    }

    /// Display label used for matching and badges.
    pub fn label(&self, option: &T) -> String {
        (self.label)(option)
    }

    pub fn key(&self, option: &T) -> OptionKey {
        (self.key)(option)
    }

    /// Whether the option rejects selection changes. Always `false` when no
    /// predicate was supplied.
    pub fn is_disabled(&self, option: &T) -> bool {
        self.disabled
            .as_ref()
            .is_some_and(|predicate| predicate(option))
    }
}

impl<T: AsRef<str>> OptionAccessors<T> {
    /// Accessors for plain string options: the option is its own label and
    /// its own key.
    #[must_use]
    pub fn text() -> Self {
        Self::new(
            |option: &T| option.as_ref().to_string(),
            |option: &T| OptionKey::Text(option.as_ref().to_string()),
        )
    }
}

impl Default for OptionAccessors<String> {
    fn default() -> Self {
        Self::text()
    }
}

impl<T> Clone for OptionAccessors<T> {
    fn clone(&self) -> Self {
        Self {
            label: Arc::clone(&self.label),
            key: Arc::clone(&self.key),
            disabled: self.disabled.clone(),
        }
    }
}

impl<T> fmt::Debug for OptionAccessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionAccessors")
            .field("disabled", &self.disabled.is_some())
            .finish_non_exhaustive()
    }
}
