use combobox_option_api::{OptionAccessors, OptionKey};
use serde::Serialize;

use crate::selection::Selection;

/// One selected option rendered as a removable badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
	pub key: OptionKey,
	pub label: String,
}

/// Badges to render for the current selection, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BadgeView {
	pub badges: Vec<Badge>,
	/// Selected options folded into a "+N more" marker.
	pub overflow: usize,
}

impl BadgeView {
	/// Build badges for `selection`, showing at most `max_count` of them.
	pub fn build<T: Clone>(
		selection: &Selection<T>,
		accessors: &OptionAccessors<T>,
		max_count: Option<usize>,
	) -> Self {
		let limit = max_count.unwrap_or(usize::MAX);
		let badges = selection
			.values()
			.take(limit)
			.map(|option| Badge {
				key: accessors.key(option),
				label: accessors.label(option),
			})
			.collect::<Vec<_>>();
		let overflow = selection.len().saturating_sub(badges.len());
		Self { badges, overflow }
	}

	/// Text of the overflow marker, if any options are hidden.
	#[must_use]
	pub fn overflow_label(&self) -> Option<String> {
		(self.overflow > 0).then(|| format!("+{} more", self.overflow))
	}
}
