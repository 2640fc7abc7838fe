//! Case handling for registered names.

use serde::{Deserialize, Serialize};

/// Whether a name also matches when spelled with different ASCII case.
///
/// SQL-facing registries use [`CaseSensitiveness::CaseInsensitive`] for names
/// like `SUM` that callers may write as `sum` or `Sum`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseSensitiveness {
	#[default]
	CaseSensitive,
	CaseInsensitive,
}

impl CaseSensitiveness {
	pub fn is_case_insensitive(self) -> bool {
		matches!(self, Self::CaseInsensitive)
	}
}

impl From<bool> for CaseSensitiveness {
	/// `true` means case-insensitive.
	fn from(case_insensitive: bool) -> Self {
		if case_insensitive { Self::CaseInsensitive } else { Self::CaseSensitive }
	}
}

/// Folds `name` to the key form used by case-insensitive maps.
///
/// Only ASCII letters are folded; other characters compare exactly.
#[inline]
pub fn fold(name: &str) -> String {
	name.to_ascii_lowercase()
}
