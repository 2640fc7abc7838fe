use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

type Prompter = NamePrompter<2>;

#[test]
fn single_typo_is_suggested() {
	let hints = Prompter::new().hints("sun", &["Sum", "Avg"]);
	assert_eq!(hints, vec!["Sum".to_string()]);
}

#[test]
fn distance_ignores_ascii_case() {
	let hints = Prompter::new().hints("SUMM", &["sum"]);
	assert_eq!(hints, vec!["sum".to_string()]);
}

#[test]
fn closer_match_ranks_first() {
	let hints = Prompter::new().hints("count", &["cont", "count"]);
	assert_eq!(hints, vec!["count".to_string(), "cont".to_string()]);
}

#[test]
fn ties_keep_candidate_order_and_cap() {
	let hints = Prompter::new().hints("abc", &["abd", "abe", "abf"]);
	assert_eq!(hints, vec!["abd".to_string(), "abe".to_string()]);
}

#[test]
fn nothing_within_budget_yields_empty() {
	assert!(Prompter::new().hints("zzzz", &["Sum", "Avg"]).is_empty());
	assert!(Prompter::new().hints("sum", &[] as &[&str]).is_empty());
}

#[test]
fn length_prefilter_rejects_long_tails() {
	// distance 3 fits the budget of 3, but the length gap is too large relative to the query.
	assert!(Prompter::new().hints("abcdefg", &["abcdefgxyz"]).is_empty());
}

#[test]
fn budget_scales_with_length() {
	assert_eq!(mistake_factor(0), 0);
	assert_eq!(mistake_factor(1), 1);
	assert_eq!(mistake_factor(3), 1);
	assert_eq!(mistake_factor(4), 2);
	assert_eq!(mistake_factor(7), 3);
}

proptest! {
	#[test]
	fn prop_hints_are_bounded_candidates(
		query in "[a-zA-Z]{0,8}",
		candidates in prop::collection::vec("[a-zA-Z]{1,8}", 0..12),
	) {
		let hints = Prompter::new().hints(&query, &candidates);
		prop_assert!(hints.len() <= 2);

		let budget = mistake_factor(query.chars().count());
		for hint in &hints {
			prop_assert!(candidates.contains(hint));
			let distance = strsim::levenshtein(
				&query.to_ascii_lowercase(),
				&hint.to_ascii_lowercase(),
			);
			prop_assert!(distance <= budget);
		}
	}
}
