use std::collections::HashSet;

pub const MAIN_LOT_NAME: &str = "Main Lot";
pub const MAIN_LOT_CAPACITY: usize = 10;

/// Occupancy failures surfaced unchanged by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LotError {
    #[error("lot full")]
    Full,
    #[error("already parked")]
    AlreadyParked,
    #[error("not parked")]
    NotParked,
}

/// Fixed-capacity occupancy tracker keyed by canonical plate.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    name: String,
    capacity: usize,
    parked: HashSet<String>,
}

impl ParkingLot {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            parked: HashSet::with_capacity(capacity),
        }
    }

    pub fn main() -> Self {
        Self::new(MAIN_LOT_NAME, MAIN_LOT_CAPACITY)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupancy(&self) -> usize {
        self.parked.len()
    }

    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.parked.len())
    }

    /// Capacity is checked first, so a full lot reports `Full` even for a plate already inside.
    pub fn park(&mut self, plate: &str) -> Result<(), LotError> {
        if self.parked.len() >= self.capacity {
            return Err(LotError::Full);
        }
        if self.parked.contains(plate) {
            return Err(LotError::AlreadyParked);
        }
        self.parked.insert(plate.to_string());
        Ok(())
    }

    pub fn remove(&mut self, plate: &str) -> Result<(), LotError> {
        if self.parked.remove(plate) {
            Ok(())
        } else {
            Err(LotError::NotParked)
        }
    }

    pub fn is_parked(&self, plate: &str) -> bool {
        self.parked.contains(plate)
    }

    /// Occupied plates in lexical order.
    pub fn parked_plates(&self) -> Vec<String> {
        let mut plates: Vec<String> = self.parked.iter().cloned().collect();
        plates.sort();
        plates
    }
}
