//! Hand-curated reference data.
//!
//! Both tables are compiled in and immutable. Components take them by
//! value (usually behind an `Arc`) at construction, so tests can swap in
//! smaller tables.

mod aliases;
mod railways;

pub use aliases::AliasTable;
pub use railways::RailwayCatalog;
