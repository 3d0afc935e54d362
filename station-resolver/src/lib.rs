//! Station name resolution server.
//!
//! Turns what a person types ("東京スカイツリー", "読売ランド") into the
//! canonical station identifiers of a transit catalog, degrading to locally
//! synthesized identifiers when the catalog cannot answer.

pub mod cache;
pub mod config;
pub mod domain;
pub mod normalize;
pub mod odpt;
pub mod reconcile;
pub mod reference;
pub mod remote;
pub mod resolver;
pub mod romanize;
pub mod stations;
pub mod synthesize;
pub mod web;

#[cfg(test)]
mod test_support;
