//! Declarative alias tables.
//!
//! Factories with many alternate spellings keep them in a TOML table instead of a
//! chain of `register_alias` calls:
//!
//! ```toml
//! [[alias]]
//! alias = "SUM"
//! target = "sum"
//! case-insensitive = true
//!
//! [[alias]]
//! alias = "countDistinct"
//! target = "uniqExact"
//! ```

use serde::Deserialize;

use crate::alias::AliasRegistry;
use crate::case::CaseSensitiveness;
use crate::error::DeclError;
use crate::source::CreatorSource;

/// One alternate name for a canonical entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AliasDecl {
	pub alias: String,
	pub target: String,
	#[serde(default)]
	pub case_insensitive: bool,
}

impl AliasDecl {
	pub fn new(alias: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			alias: alias.into(),
			target: target.into(),
			case_insensitive: false,
		}
	}

	pub fn case_insensitive(mut self) -> Self {
		self.case_insensitive = true;
		self
	}

	pub fn case_sensitiveness(&self) -> CaseSensitiveness {
		self.case_insensitive.into()
	}
}

/// Ordered list of alias declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasTable {
	#[serde(default, rename = "alias")]
	pub aliases: Vec<AliasDecl>,
}

impl AliasTable {
	/// Parses a table of `[[alias]]` entries.
	pub fn from_toml_str(input: &str) -> Result<Self, DeclError> {
		Ok(toml::from_str(input)?)
	}

	pub fn len(&self) -> usize {
		self.aliases.len()
	}

	pub fn is_empty(&self) -> bool {
		self.aliases.is_empty()
	}

	/// Registers every declaration into `registry`, in table order.
	pub fn apply<S: CreatorSource>(&self, registry: &mut AliasRegistry<S>) -> Result<(), DeclError> {
		registry.register_aliases(&self.aliases)?;
		tracing::debug!(
			registry = registry.source().label(),
			count = self.aliases.len(),
			"applied alias table"
		);
		Ok(())
	}
}
