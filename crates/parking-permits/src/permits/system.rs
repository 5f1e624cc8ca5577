use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{canonical_plate, Driver, DriverId, ValidationError, Vehicle};
use super::lot::{LotError, ParkingLot};
use super::pass::{ParkingPass, PassId, PassIdSource, PassKind, UnknownPassType, UuidPassIds};

/// Cross-entity rule violations raised by the coordinator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParkingError {
    #[error("plate exists")]
    PlateExists,
    #[error("driver id exists")]
    DriverExists,
    #[error("driver not found")]
    DriverNotFound,
    #[error("vehicle already has a pass")]
    VehicleAlreadyHasPass,
    #[error(transparent)]
    UnknownPassType(#[from] UnknownPassType),
    #[error("plate not registered")]
    PlateNotRegistered,
    #[error("no pass")]
    NoPass,
    #[error("invalid hours: {0}")]
    InvalidHours(f64),
    #[error(transparent)]
    Lot(#[from] LotError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Listing row for an issued pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassView {
    pub pid: PassId,
    pub kind: PassKind,
    pub driver_name: String,
    pub plate: String,
    pub issued_at: DateTime<Utc>,
}

/// Point-in-time view of the registry for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSnapshot {
    pub lot_name: String,
    pub capacity: usize,
    pub occupancy: usize,
    pub parked: Vec<String>,
    pub drivers: usize,
    pub passes: Vec<PassView>,
}

impl SystemSnapshot {
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Coordinator owning every index and the lot.
///
/// All plate-keyed indexes use the canonical plate. Each operation either fully applies or
/// leaves every index untouched.
pub struct ParkingSystem<S = UuidPassIds> {
    drivers_by_id: HashMap<DriverId, Driver>,
    drivers_by_plate: HashMap<String, DriverId>,
    passes: Vec<ParkingPass>,
    pass_by_pid: HashMap<PassId, usize>,
    pass_by_plate: HashMap<String, usize>,
    lot: ParkingLot,
    ids: S,
}

impl ParkingSystem<UuidPassIds> {
    pub fn new() -> Self {
        Self::with_parts(ParkingLot::main(), UuidPassIds)
    }
}

impl Default for ParkingSystem<UuidPassIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ParkingSystem<S>
where
    S: PassIdSource,
{
    pub fn with_parts(lot: ParkingLot, ids: S) -> Self {
        Self {
            drivers_by_id: HashMap::new(),
            drivers_by_plate: HashMap::new(),
            passes: Vec::new(),
            pass_by_pid: HashMap::new(),
            pass_by_plate: HashMap::new(),
            lot,
            ids,
        }
    }

    /// Register a driver together with their vehicle.
    pub fn register_driver(
        &mut self,
        name: &str,
        id_number: &str,
        plate: &str,
        vehicle_type: &str,
    ) -> Result<&Driver, ParkingError> {
        let plate = canonical_plate(plate);
        if self.drivers_by_plate.contains_key(&plate) {
            debug!(%plate, "registration rejected: plate exists");
            return Err(ParkingError::PlateExists);
        }

        let vehicle = Vehicle::new(&plate, vehicle_type)?;
        let driver = Driver::new(name, id_number, vehicle)?;
        let id = driver.id_number().clone();
        if self.drivers_by_id.contains_key(&id) {
            debug!(driver_id = %id, "registration rejected: driver id exists");
            return Err(ParkingError::DriverExists);
        }

        info!(driver_id = %id, %plate, "driver registered");
        self.drivers_by_plate.insert(plate, id.clone());
        Ok(self.drivers_by_id.entry(id).or_insert(driver))
    }

    /// Issue the single pass a driver's vehicle may hold.
    pub fn issue_pass(
        &mut self,
        id_number: &str,
        pass_type: &str,
    ) -> Result<&ParkingPass, ParkingError> {
        let id = DriverId(id_number.trim().to_string());
        let driver = self
            .drivers_by_id
            .get(&id)
            .ok_or(ParkingError::DriverNotFound)?;
        let plate = driver.vehicle().plate().to_string();

        if self.pass_by_plate.contains_key(&plate) {
            debug!(%plate, "issuance rejected: vehicle already has a pass");
            return Err(ParkingError::VehicleAlreadyHasPass);
        }

        let pid = self.fresh_pass_id();
        let kind: PassKind = pass_type.parse()?;

        info!(%pid, driver_id = %id, %plate, kind = kind.label(), "pass issued");
        let index = self.passes.len();
        self.pass_by_pid.insert(pid.clone(), index);
        self.pass_by_plate.insert(plate.clone(), index);
        self.passes.push(ParkingPass::new(pid, kind, id, plate));
        Ok(&self.passes[index])
    }

    /// Exact, case-sensitive lookup; callers pass a canonical plate.
    pub fn get_pass(&self, plate: &str) -> Option<&ParkingPass> {
        self.pass_by_plate
            .get(plate)
            .map(|&index| &self.passes[index])
    }

    pub fn park(&mut self, plate: &str) -> Result<(), ParkingError> {
        let plate = canonical_plate(plate);
        if !self.drivers_by_plate.contains_key(&plate) {
            debug!(%plate, "park rejected: plate not registered");
            return Err(ParkingError::PlateNotRegistered);
        }
        if self.get_pass(&plate).is_none() {
            debug!(%plate, "park rejected: no pass");
            return Err(ParkingError::NoPass);
        }

        self.lot.park(&plate)?;
        info!(%plate, occupancy = self.lot.occupancy(), "vehicle parked");
        Ok(())
    }

    /// Release a parked vehicle and return the fee owed for `hours`.
    pub fn remove(&mut self, plate: &str, hours: f64) -> Result<f64, ParkingError> {
        let plate = canonical_plate(plate);
        let index = match self.pass_by_plate.get(&plate) {
            Some(&index) => index,
            None => {
                debug!(%plate, "remove rejected: no pass");
                return Err(ParkingError::NoPass);
            }
        };
        if !hours.is_finite() || hours < 0.0 {
            return Err(ParkingError::InvalidHours(hours));
        }

        self.lot.remove(&plate)?;
        let fee = self.passes[index].calculate_fee(hours);
        info!(%plate, hours, fee, "vehicle removed");
        Ok(fee)
    }

    pub fn driver(&self, id_number: &str) -> Option<&Driver> {
        self.drivers_by_id.get(&DriverId(id_number.trim().to_string()))
    }

    pub fn driver_by_plate(&self, plate: &str) -> Option<&Driver> {
        self.drivers_by_plate
            .get(&canonical_plate(plate))
            .and_then(|id| self.drivers_by_id.get(id))
    }

    pub fn driver_count(&self) -> usize {
        self.drivers_by_id.len()
    }

    pub fn pass(&self, pid: &PassId) -> Option<&ParkingPass> {
        self.pass_by_pid.get(pid).map(|&index| &self.passes[index])
    }

    /// Issued passes in issuance order.
    pub fn passes(&self) -> &[ParkingPass] {
        &self.passes
    }

    pub fn pass_views(&self) -> Vec<PassView> {
        self.passes
            .iter()
            .map(|pass| PassView {
                pid: pass.pid().clone(),
                kind: pass.kind(),
                driver_name: self
                    .drivers_by_id
                    .get(pass.driver_id())
                    .map(|driver| driver.name().to_string())
                    .unwrap_or_default(),
                plate: pass.plate().to_string(),
                issued_at: pass.issued_at(),
            })
            .collect()
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            lot_name: self.lot.name().to_string(),
            capacity: self.lot.capacity(),
            occupancy: self.lot.occupancy(),
            parked: self.lot.parked_plates(),
            drivers: self.drivers_by_id.len(),
            passes: self.pass_views(),
        }
    }

    fn fresh_pass_id(&mut self) -> PassId {
        loop {
            let pid = self.ids.next_pass_id();
            if !self.pass_by_pid.contains_key(&pid) {
                return pid;
            }
            debug!(%pid, "pass id collision, drawing again");
        }
    }
}
