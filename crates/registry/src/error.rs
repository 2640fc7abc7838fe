//! Registration and lookup errors.
//!
//! Every variant carries the registry label so a failure in static setup
//! points at the factory that was misconfigured.

/// Alias registration and resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
	/// The alias target is not a canonical name in either creator map.
	#[error("{registry}: can't create alias '{alias}', the real name '{real}' is not registered")]
	UnknownRealName {
		registry: String,
		alias: String,
		real: String,
	},

	/// The alias would shadow an existing canonical name.
	#[error("{registry}: the alias name '{alias}' is already registered as real name")]
	AliasShadowsCanonical { registry: String, alias: String },

	/// The lowercased alias is already a case-insensitive alias.
	#[error("{registry}: case insensitive alias name '{alias}' is not unique")]
	DuplicateCaseInsensitiveAlias { registry: String, alias: String },

	/// The alias is already registered.
	#[error("{registry}: alias name '{alias}' is not unique")]
	DuplicateAlias { registry: String, alias: String },

	/// The name resolves through neither alias map.
	#[error("{registry}: name '{name}' is not alias")]
	NotAnAlias { registry: String, name: String },
}

/// Canonical creator registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatorError {
	#[error("{registry}: the name '{name}' is not unique")]
	DuplicateCreator { registry: String, name: String },

	#[error("{registry}: the case insensitive name '{name}' is not unique")]
	DuplicateCaseInsensitiveCreator { registry: String, name: String },
}

/// Errors raised while loading a declarative alias table.
#[derive(Debug, thiserror::Error)]
pub enum DeclError {
	/// The table is not valid TOML or does not match the expected shape.
	#[error("alias table parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A declaration was rejected by the registry.
	#[error(transparent)]
	Register(#[from] AliasError),
}
