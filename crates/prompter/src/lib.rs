//! Typo hints for registered names.
//!
//! [`NamePrompter`] ranks a candidate list against a misspelled query by
//! case-insensitive Levenshtein distance. The accepted distance scales with the
//! query length: a query of `n` characters tolerates `(n + 2) / 3` edits, the
//! same budget clang uses for its typo corrector.

/// Suggests the closest candidates for a name that failed to resolve.
///
/// `MAX_HINTS` caps the number of returned suggestions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePrompter<const MAX_HINTS: usize>;

impl<const MAX_HINTS: usize> NamePrompter<MAX_HINTS> {
	pub const fn new() -> Self {
		Self
	}

	/// Returns at most `MAX_HINTS` candidates within the edit budget of `name`.
	///
	/// Results are ordered by distance, ties by position in `candidates`.
	pub fn hints<S: AsRef<str>>(&self, name: &str, candidates: &[S]) -> Vec<String> {
		let name_len = name.chars().count();
		let budget = mistake_factor(name_len);
		let folded = name.to_ascii_lowercase();

		let mut ranked: Vec<(usize, usize)> = candidates
			.iter()
			.enumerate()
			.filter_map(|(idx, candidate)| {
				let candidate = candidate.as_ref();
				let len_diff = name_len.abs_diff(candidate.chars().count());
				if len_diff > 0 && name_len / len_diff < budget {
					return None;
				}
				let distance = strsim::levenshtein(&folded, &candidate.to_ascii_lowercase());
				(distance <= budget).then_some((distance, idx))
			})
			.collect();

		ranked.sort_unstable();
		ranked
			.into_iter()
			.take(MAX_HINTS)
			.map(|(_, idx)| candidates[idx].as_ref().to_string())
			.collect()
	}
}

/// Maximum edit distance accepted for a query of `len` characters.
pub const fn mistake_factor(len: usize) -> usize {
	(len + 2) / 3
}

#[cfg(test)]
mod tests;
