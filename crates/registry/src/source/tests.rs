use super::*;
use crate::case::CaseSensitiveness::{CaseInsensitive, CaseSensitive};

#[test]
fn case_sensitive_creator_lands_in_exact_map_only() {
	let mut table = CreatorTable::new("test");
	table.register("CountDistinct", 1, CaseSensitive).unwrap();

	assert!(table.contains("CountDistinct"));
	assert_eq!(table.len(), 1);
	assert!(table.case_insensitive_creators().is_empty());
}

#[test]
fn case_insensitive_creator_is_folded() {
	let mut table = CreatorTable::new("test");
	table.register("Sum", 1, CaseInsensitive).unwrap();

	assert_eq!(table.creators().get("Sum"), Some(&1));
	assert_eq!(table.case_insensitive_creators().get("sum"), Some(&1));
	assert!(table.case_insensitive_creators().get("Sum").is_none());
}

#[test]
fn duplicate_creator_is_rejected() {
	let mut table = CreatorTable::new("FunctionFactory");
	table.register("plus", 1, CaseSensitive).unwrap();

	let err = table.register("plus", 2, CaseSensitive).unwrap_err();
	assert_eq!(
		err,
		CreatorError::DuplicateCreator {
			registry: "FunctionFactory".into(),
			name: "plus".into(),
		}
	);
	assert_eq!(table.creators().get("plus"), Some(&1));
}

#[test]
fn duplicate_folded_creator_commits_nothing() {
	let mut table = CreatorTable::new("test");
	table.register("max", 1, CaseInsensitive).unwrap();

	let err = table.register("MAX", 2, CaseInsensitive).unwrap_err();
	assert!(matches!(err, CreatorError::DuplicateCaseInsensitiveCreator { .. }));
	assert!(!table.contains("MAX"));
	assert_eq!(table.case_insensitive_creators().get("max"), Some(&1));
}

#[test]
fn borrowed_table_is_a_source() {
	fn label_of<S: CreatorSource>(source: S) -> String {
		source.label().to_string()
	}

	let table = CreatorTable::<u8>::new("DataTypeFactory");
	assert_eq!(label_of(&table), "DataTypeFactory");
	assert!(table.is_empty());
}

#[test]
fn error_message_names_registry() {
	let mut table = CreatorTable::new("FormatFactory");
	table.register("CSV", (), CaseSensitive).unwrap();
	let err = table.register("CSV", (), CaseSensitive).unwrap_err();
	assert_eq!(err.to_string(), "FormatFactory: the name 'CSV' is not unique");
}
