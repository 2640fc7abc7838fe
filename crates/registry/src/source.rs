//! Canonical creator maps consumed by the alias layer.
//!
//! # Role
//!
//! The alias layer never owns canonical entries. It reads them through
//! [`CreatorSource`], which any factory can implement over its own storage.
//! [`CreatorTable`] is the ready-made implementation.
//!
//! # Invariants
//!
//! - Keys of [`CreatorSource::case_insensitive_creators`] are already folded
//!   with [`crate::case::fold`].
//! - Maps iterate in insertion order, which fixes the order of
//!   [`crate::AliasRegistry::all_registered_names`].

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::case::{CaseSensitiveness, fold};
use crate::error::CreatorError;

/// Name to creator map, iterated in insertion order.
pub type CreatorMap<C> = IndexMap<String, C, FxBuildHasher>;

/// Read access to a factory's canonical creators.
pub trait CreatorSource {
	/// The value stored per canonical name. Opaque to the alias layer.
	type Creator;

	/// Canonical name to creator, exact keys.
	fn creators(&self) -> &CreatorMap<Self::Creator>;

	/// Canonical name to creator for case-insensitive names, folded keys.
	fn case_insensitive_creators(&self) -> &CreatorMap<Self::Creator>;

	/// Label used to prefix diagnostics, e.g. `"AggregateFunctionFactory"`.
	fn label(&self) -> &str;
}

impl<T: CreatorSource + ?Sized> CreatorSource for &T {
	type Creator = T::Creator;

	fn creators(&self) -> &CreatorMap<Self::Creator> {
		(**self).creators()
	}

	fn case_insensitive_creators(&self) -> &CreatorMap<Self::Creator> {
		(**self).case_insensitive_creators()
	}

	fn label(&self) -> &str {
		(**self).label()
	}
}

/// Owned pair of creator maps populated during static setup.
#[derive(Debug, Clone)]
pub struct CreatorTable<C> {
	label: String,
	creators: CreatorMap<C>,
	case_insensitive: CreatorMap<C>,
}

impl<C> CreatorTable<C> {
	/// Creates an empty table with the given label for error messages.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			creators: CreatorMap::default(),
			case_insensitive: CreatorMap::default(),
		}
	}

	pub fn len(&self) -> usize {
		self.creators.len()
	}

	pub fn is_empty(&self) -> bool {
		self.creators.is_empty()
	}

	/// Returns true if `name` is an exact canonical name.
	pub fn contains(&self, name: &str) -> bool {
		self.creators.contains_key(name)
	}
}

impl<C: Clone> CreatorTable<C> {
	/// Registers `creator` under `name`.
	///
	/// Case-insensitive names are additionally stored under their folded key.
	/// Both keys are checked before either map is touched.
	pub fn register(
		&mut self,
		name: &str,
		creator: C,
		case_sensitiveness: CaseSensitiveness,
	) -> Result<(), CreatorError> {
		let folded = case_sensitiveness.is_case_insensitive().then(|| fold(name));

		if self.creators.contains_key(name) {
			return Err(CreatorError::DuplicateCreator {
				registry: self.label.clone(),
				name: name.to_string(),
			});
		}
		if let Some(key) = &folded
			&& self.case_insensitive.contains_key(key.as_str())
		{
			return Err(CreatorError::DuplicateCaseInsensitiveCreator {
				registry: self.label.clone(),
				name: name.to_string(),
			});
		}

		if let Some(key) = folded {
			self.case_insensitive.insert(key, creator.clone());
		}
		self.creators.insert(name.to_string(), creator);

		tracing::debug!(
			registry = %self.label,
			name,
			?case_sensitiveness,
			"registered creator"
		);
		Ok(())
	}
}

impl<C> CreatorSource for CreatorTable<C> {
	type Creator = C;

	fn creators(&self) -> &CreatorMap<C> {
		&self.creators
	}

	fn case_insensitive_creators(&self) -> &CreatorMap<C> {
		&self.case_insensitive
	}

	fn label(&self) -> &str {
		&self.label
	}
}

#[cfg(test)]
mod tests;
