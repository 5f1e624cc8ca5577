//! Driver and vehicle registration, pass issuance, and lot occupancy.
//!
//! [`ParkingSystem`] is the only entry point that mutates state; it enforces plate uniqueness,
//! one pass per vehicle, and pass-required-to-park on top of the per-entity validation in
//! [`domain`] and the capacity bound in [`lot`].

pub mod domain;
pub mod lot;
pub mod pass;
pub mod system;

#[cfg(test)]
mod tests;

pub use domain::{canonical_plate, Driver, DriverId, ValidationError, Vehicle};
pub use lot::{LotError, ParkingLot, MAIN_LOT_CAPACITY, MAIN_LOT_NAME};
pub use pass::{
    ParkingPass, PassId, PassIdSource, PassKind, UnknownPassType, UuidPassIds, PASS_ID_LEN,
};
pub use system::{ParkingError, ParkingSystem, PassView, SystemSnapshot};
