//! Alias layer over a canonical creator source.
//!
//! # Mental Model
//!
//! 1. **Registration phase:** the owning factory fills its [`CreatorSource`], wraps it in an
//!    [`AliasRegistry`] and calls [`AliasRegistry::register_alias`] for every alternate name.
//! 2. **Finalization:** [`AliasRegistry::finalize`] consumes the registry, snapshots every
//!    registered name, and returns a [`FrozenRegistry`].
//! 3. **Query phase:** the frozen registry is read-only. It resolves names and produces typo
//!    hints from the snapshot. It never changes again, so the hints always see every alias.
//!
//! # Lookup Order
//!
//! Resolution checks the exact alias map first, then the folded (case-insensitive) alias
//! map. A name matching neither is returned unchanged and treated as canonical.
//!
//! # Invariants
//!
//! - An alias targets a name that exists in the source at registration time.
//!   - Enforced in: [`AliasRegistry::register_alias`] (step 1).
//!   - Tested by: `alias::tests::unknown_real_name_is_rejected`
//! - An alias never shadows a canonical name.
//!   - Enforced in: [`AliasRegistry::register_alias`] (step 2).
//!   - Tested by: `alias::tests::canonical_name_cannot_become_alias`
//! - A failed registration leaves both alias maps untouched.
//!   - Enforced in: [`AliasRegistry::register_alias`] (all checks precede the commit).
//!   - Tested by: `alias::tests::failed_case_insensitive_registration_commits_nothing`
//! - Every alias has an exact-key entry, so enumeration never needs the folded map.
//!   - Enforced in: [`AliasRegistry::register_alias`] (commit).

use std::ops::Deref;

use indexmap::IndexMap;
use nomen_prompter::NamePrompter;
use rustc_hash::FxBuildHasher;

use crate::case::{CaseSensitiveness, fold};
use crate::decl::AliasDecl;
use crate::error::AliasError;
use crate::source::CreatorSource;

/// Maximum number of typo hints returned per query.
pub const MAX_HINTS: usize = 2;

/// Alias name to canonical name.
type AliasMap = IndexMap<String, String, FxBuildHasher>;

/// Registration-phase alias registry.
///
/// All lookups are available here; typo hints are not, see [`FrozenRegistry`].
#[derive(Debug, Clone)]
pub struct AliasRegistry<S> {
	source: S,
	aliases: AliasMap,
	case_insensitive_aliases: AliasMap,
}

impl<S: CreatorSource> AliasRegistry<S> {
	/// Wraps a populated creator source.
	pub fn new(source: S) -> Self {
		Self {
			source,
			aliases: AliasMap::default(),
			case_insensitive_aliases: AliasMap::default(),
		}
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Registers `alias_name` as another name for `real_name`.
	///
	/// `real_name` must already be canonical, either exactly or, for case-insensitive
	/// creators, after folding. In the latter case the alias points at the folded name.
	pub fn register_alias(
		&mut self,
		alias_name: &str,
		real_name: &str,
		case_sensitiveness: CaseSensitiveness,
	) -> Result<(), AliasError> {
		let creators = self.source.creators();
		let case_insensitive_creators = self.source.case_insensitive_creators();

		let target = if creators.contains_key(real_name) {
			real_name.to_string()
		} else {
			let real_folded = fold(real_name);
			if !case_insensitive_creators.contains_key(real_folded.as_str()) {
				return Err(AliasError::UnknownRealName {
					registry: self.label(),
					alias: alias_name.to_string(),
					real: real_name.to_string(),
				});
			}
			real_folded
		};

		let alias_folded = fold(alias_name);
		if creators.contains_key(alias_name)
			|| case_insensitive_creators.contains_key(alias_folded.as_str())
		{
			return Err(AliasError::AliasShadowsCanonical {
				registry: self.label(),
				alias: alias_name.to_string(),
			});
		}

		let case_insensitive = case_sensitiveness.is_case_insensitive();
		if case_insensitive
			&& self
				.case_insensitive_aliases
				.contains_key(alias_folded.as_str())
		{
			return Err(AliasError::DuplicateCaseInsensitiveAlias {
				registry: self.label(),
				alias: alias_name.to_string(),
			});
		}
		if self.aliases.contains_key(alias_name) {
			return Err(AliasError::DuplicateAlias {
				registry: self.label(),
				alias: alias_name.to_string(),
			});
		}

		if case_insensitive {
			self.case_insensitive_aliases
				.insert(alias_folded, target.clone());
		}
		tracing::debug!(
			registry = self.source.label(),
			alias = alias_name,
			target = %target,
			?case_sensitiveness,
			"registered alias"
		);
		self.aliases.insert(alias_name.to_string(), target);
		Ok(())
	}

	/// Registers each declaration in order, stopping at the first failure.
	///
	/// Declarations before the failing one stay registered.
	pub fn register_aliases<'a, I>(&mut self, decls: I) -> Result<(), AliasError>
	where
		I: IntoIterator<Item = &'a AliasDecl>,
	{
		for decl in decls {
			self.register_alias(&decl.alias, &decl.target, decl.case_sensitiveness())?;
		}
		Ok(())
	}

	/// Returns the canonical name for `name` if it is an alias, otherwise `name` itself.
	pub fn alias_to_or_name(&self, name: &str) -> String {
		self.lookup(name).unwrap_or(name).to_string()
	}

	/// Returns the canonical name `name` is an alias of.
	pub fn alias_to(&self, name: &str) -> Result<&str, AliasError> {
		self.lookup(name).ok_or_else(|| AliasError::NotAnAlias {
			registry: self.label(),
			name: name.to_string(),
		})
	}

	/// Returns true if `name` is a registered alias key.
	///
	/// Unlike [`Self::alias_to`], the case-insensitive map is probed with `name` as
	/// written, not folded. `"SUM"` registered case-insensitively is reported for
	/// `"SUM"` (exact key) and `"sum"` (folded key), but not for `"Sum"`, even though
	/// `alias_to("Sum")` resolves.
	pub fn is_alias(&self, name: &str) -> bool {
		self.aliases.contains_key(name) || self.case_insensitive_aliases.contains_key(name)
	}

	/// Returns true if `name` matches a case-insensitive creator or alias after folding.
	pub fn is_case_insensitive(&self, name: &str) -> bool {
		let folded = fold(name);
		self.source
			.case_insensitive_creators()
			.contains_key(folded.as_str())
			|| self.case_insensitive_aliases.contains_key(folded.as_str())
	}

	/// Resolves `name` through the aliases and returns its creator.
	pub fn get(&self, name: &str) -> Option<&S::Creator> {
		let resolved = self.lookup(name).unwrap_or(name);
		self.source.creators().get(resolved).or_else(|| {
			self.source
				.case_insensitive_creators()
				.get(fold(resolved).as_str())
		})
	}

	/// Canonical names followed by aliases, both in registration order.
	///
	/// Folded alias keys are not listed separately; each alias appears once as written.
	pub fn all_registered_names(&self) -> Vec<String> {
		self.source
			.creators()
			.keys()
			.chain(self.aliases.keys())
			.cloned()
			.collect()
	}

	/// Number of registered aliases.
	pub fn alias_count(&self) -> usize {
		self.aliases.len()
	}

	/// Ends the registration phase and snapshots the registered names for hints.
	pub fn finalize(self) -> FrozenRegistry<S> {
		let names = self.all_registered_names().into_boxed_slice();
		tracing::debug!(
			registry = self.source.label(),
			names = names.len(),
			aliases = self.aliases.len(),
			"alias registry finalized"
		);
		FrozenRegistry {
			inner: self,
			names,
			prompter: NamePrompter::new(),
		}
	}

	fn lookup(&self, name: &str) -> Option<&str> {
		self.aliases
			.get(name)
			.or_else(|| self.case_insensitive_aliases.get(fold(name).as_str()))
			.map(String::as_str)
	}

	fn label(&self) -> String {
		self.source.label().to_string()
	}
}

/// Query-phase alias registry.
///
/// Dereferences to [`AliasRegistry`] for lookups. Registration is unavailable because
/// the registry is only reachable by shared reference.
#[derive(Debug, Clone)]
pub struct FrozenRegistry<S> {
	inner: AliasRegistry<S>,
	names: Box<[String]>,
	prompter: NamePrompter<MAX_HINTS>,
}

impl<S: CreatorSource> FrozenRegistry<S> {
	/// Suggests up to [`MAX_HINTS`] registered names close to `name`.
	pub fn hints(&self, name: &str) -> Vec<String> {
		let hints = self.prompter.hints(name, &self.names[..]);
		tracing::trace!(
			registry = self.inner.source.label(),
			name,
			hints = ?hints,
			"computed name hints"
		);
		hints
	}

	/// The names snapshotted by [`AliasRegistry::finalize`].
	pub fn registered_names(&self) -> &[String] {
		&self.names
	}
}

impl<S> Deref for FrozenRegistry<S> {
	type Target = AliasRegistry<S>;

	fn deref(&self) -> &Self::Target {
		&self.inner
	}
}
