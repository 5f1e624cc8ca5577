//! Parking permit registry: driver and vehicle registration, typed passes, lot occupancy
//! and hourly fees.

pub mod config;
pub mod error;
pub mod permits;
pub mod telemetry;
