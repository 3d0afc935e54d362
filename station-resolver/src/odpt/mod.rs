//! Transit catalog client.
//!
//! The catalog is the authority on station identifiers. It is queried for
//! one station on one railway at a time, and a lookup that cannot be
//! completed is reported rather than raised, so callers can fall back to
//! synthesis.

mod client;
mod error;

pub use client::{OdptClient, OdptConfig, StationCatalog};
pub use error::OdptError;
