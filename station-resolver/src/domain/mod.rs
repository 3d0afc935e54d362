//! Domain types for station resolution.
//!
//! Identifiers are validated at construction time, so code that receives
//! a `RailwayId` or `StationId` can trust its shape.

mod error;
mod record;
mod station_id;

pub use error::ResolveError;
pub use record::StationRecord;
pub use station_id::{InvalidRailwayId, InvalidStationId, RailwayId, StationId};
