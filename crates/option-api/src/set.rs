use serde::Serialize;

use crate::accessors::OptionAccessors;
use crate::key::OptionKey;

/// A labelled partition of options. Membership belongs to the group, not to
/// the option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionGroup<T> {
    pub group: String,
    pub options: Vec<T>,
}

impl<T> OptionGroup<T> {
    #[must_use]
    pub fn new(group: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            group: group.into(),
            options,
        }
    }
}

/// The options of a combobox, either flat or grouped.
///
/// The shape is decided once when the options are ingested and never
/// re-inspected afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionSet<T> {
    Flat(Vec<T>),
    Grouped(Vec<OptionGroup<T>>),
}

impl<T> Default for OptionSet<T> {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl<T> From<Vec<T>> for OptionSet<T> {
    fn from(options: Vec<T>) -> Self {
        Self::Flat(options)
    }
}

impl<T> From<Vec<OptionGroup<T>>> for OptionSet<T> {
    fn from(groups: Vec<OptionGroup<T>>) -> Self {
        Self::Grouped(groups)
    }
}

impl<T> OptionSet<T> {
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// Total number of options across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(options) => options.len(),
            Self::Grouped(groups) => groups.iter().map(|group| group.options.len()).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every option in encounter order, group by group.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Self::Flat(options) => Box::new(options.iter()),
            Self::Grouped(groups) => Box::new(groups.iter().flat_map(|group| group.options.iter())),
        }
    }

    /// Find the first option whose derived key equals `key`.
    pub fn find(&self, key: &OptionKey, accessors: &OptionAccessors<T>) -> Option<&T> {
        self.iter().find(|option| accessors.key(option) == *key)
    }
}
