use std::fmt;

use serde::{Deserialize, Serialize};

/// Field-level failures raised when constructing or mutating a driver or vehicle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid name")]
    InvalidName,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid plate")]
    InvalidPlate,
    #[error("invalid vehicle type")]
    InvalidType,
}

/// Trims surrounding whitespace and uppercases, the form every plate index is keyed by.
pub fn canonical_plate(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn non_empty(raw: &str, err: ValidationError) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed)
    }
}

/// Identifier wrapper for registered drivers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriverId(pub String);

impl DriverId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    plate: String,
    vehicle_type: String,
}

impl Vehicle {
    pub fn new(plate: &str, vehicle_type: &str) -> Result<Self, ValidationError> {
        let mut vehicle = Self {
            plate: String::new(),
            vehicle_type: String::new(),
        };
        vehicle.set_plate(plate)?;
        vehicle.set_vehicle_type(vehicle_type)?;
        Ok(vehicle)
    }

    /// Canonical plate: trimmed and uppercased.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Trimmed and lowercased.
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn set_plate(&mut self, plate: &str) -> Result<(), ValidationError> {
        let plate = canonical_plate(plate);
        if plate.is_empty() {
            return Err(ValidationError::InvalidPlate);
        }
        self.plate = plate;
        Ok(())
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: &str) -> Result<(), ValidationError> {
        let vehicle_type = non_empty(vehicle_type, ValidationError::InvalidType)?;
        self.vehicle_type = vehicle_type.to_lowercase();
        Ok(())
    }
}

/// A registered driver and the one vehicle they were registered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Driver {
    name: String,
    id_number: DriverId,
    vehicle: Vehicle,
}

impl Driver {
    pub fn new(name: &str, id_number: &str, vehicle: Vehicle) -> Result<Self, ValidationError> {
        let name = non_empty(name, ValidationError::InvalidName)?.to_string();
        let id_number = DriverId(non_empty(id_number, ValidationError::InvalidId)?.to_string());
        Ok(Self {
            name,
            id_number,
            vehicle,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id_number(&self) -> &DriverId {
        &self.id_number
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = non_empty(name, ValidationError::InvalidName)?.to_string();
        Ok(())
    }

    pub fn set_id_number(&mut self, id_number: &str) -> Result<(), ValidationError> {
        self.id_number = DriverId(non_empty(id_number, ValidationError::InvalidId)?.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_canonicalizes_plate_and_type() {
        let vehicle = Vehicle::new("  abc-123 ", " SUV ").expect("valid vehicle");
        assert_eq!(vehicle.plate(), "ABC-123");
        assert_eq!(vehicle.vehicle_type(), "suv");
    }

    #[test]
    fn only_surrounding_whitespace_is_trimmed() {
        let vehicle = Vehicle::new(" ab  12 ", "Pick Up").expect("valid vehicle");
        assert_eq!(vehicle.plate(), "AB  12");
        assert_eq!(vehicle.vehicle_type(), "pick up");

        let driver = Driver::new("  Ann   Lee ", " S1 ", vehicle).expect("valid driver");
        assert_eq!(driver.name(), "Ann   Lee");
        assert_eq!(driver.id_number().as_str(), "S1");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(Vehicle::new("   ", "car"), Err(ValidationError::InvalidPlate));
        assert_eq!(Vehicle::new("X1", "\t"), Err(ValidationError::InvalidType));

        let vehicle = Vehicle::new("X1", "car").expect("valid vehicle");
        assert_eq!(
            Driver::new("", "S1", vehicle.clone()),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            Driver::new("Ann", "  ", vehicle),
            Err(ValidationError::InvalidId)
        );
    }

    #[test]
    fn failed_setter_keeps_previous_value() {
        let mut vehicle = Vehicle::new("x1", "car").expect("valid vehicle");
        assert_eq!(vehicle.set_plate(" "), Err(ValidationError::InvalidPlate));
        assert_eq!(vehicle.plate(), "X1");
        vehicle.set_vehicle_type("VAN").expect("valid type");
        assert_eq!(vehicle.vehicle_type(), "van");

        let mut driver = Driver::new("Ann", "S1", vehicle).expect("valid driver");
        assert_eq!(driver.set_name("  "), Err(ValidationError::InvalidName));
        assert_eq!(driver.name(), "Ann");
        driver.set_id_number(" S2 ").expect("valid id");
        assert_eq!(driver.id_number(), &DriverId("S2".to_string()));
    }

    #[test]
    fn validation_messages_are_stable() {
        assert_eq!(ValidationError::InvalidPlate.to_string(), "invalid plate");
        assert_eq!(ValidationError::InvalidType.to_string(), "invalid vehicle type");
    }
}
