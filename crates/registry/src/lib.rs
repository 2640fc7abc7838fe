//! Alias-aware name resolution for creator registries.
//!
//! A factory keeps its canonical creators in a [`CreatorSource`]. This crate layers
//! alternate names on top: exact aliases, case-insensitive aliases, and typo hints
//! for names that resolve to nothing.
//!
//! ```
//! use nomen_registry::{AliasRegistry, CaseSensitiveness, CreatorTable};
//!
//! let mut table = CreatorTable::new("AggregateFunctionFactory");
//! table.register("Sum", 1u32, CaseSensitiveness::CaseSensitive)?;
//!
//! let mut registry = AliasRegistry::new(table);
//! registry.register_alias("SUM", "Sum", CaseSensitiveness::CaseInsensitive)?;
//!
//! let registry = registry.finalize();
//! assert_eq!(registry.alias_to_or_name("sum"), "Sum");
//! assert_eq!(registry.get("sUm"), Some(&1));
//! assert_eq!(registry.hints("Sun"), vec!["Sum".to_string(), "SUM".to_string()]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Alias maps, resolution, and the registration/query phases.
pub mod alias;
/// Case sensitivity modes and name folding.
pub mod case;
/// Declarative alias tables.
pub mod decl;
/// Error types.
pub mod error;
/// Canonical creator maps.
pub mod source;

pub use alias::{AliasRegistry, FrozenRegistry, MAX_HINTS};
pub use case::CaseSensitiveness;
pub use decl::{AliasDecl, AliasTable};
pub use error::{AliasError, CreatorError, DeclError};
pub use source::{CreatorMap, CreatorSource, CreatorTable};
