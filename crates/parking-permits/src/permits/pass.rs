use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::DriverId;

pub const PASS_ID_LEN: usize = 8;

/// Opaque pass identifier, always [`PASS_ID_LEN`] lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassId(pub String);

impl PassId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of pass variants, each carrying a fixed hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Student,
    Staff,
}

impl PassKind {
    /// Currency units per hour.
    pub const fn rate(self) -> u32 {
        match self {
            PassKind::Student => 2,
            PassKind::Staff => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PassKind::Student => "student",
            PassKind::Staff => "staff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pass type '{0}'")]
pub struct UnknownPassType(pub String);

impl FromStr for PassKind {
    type Err = UnknownPassType;

    /// Exact match only; callers normalize case before asking.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "student" => Ok(PassKind::Student),
            "staff" => Ok(PassKind::Staff),
            other => Err(UnknownPassType(other.to_string())),
        }
    }
}

/// Authorization for one vehicle to use the lot, billed at the variant's rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkingPass {
    pid: PassId,
    kind: PassKind,
    driver_id: DriverId,
    /// Copied from the driver's vehicle at issuance and keyed into the plate-to-pass index.
    /// Any path that re-plates a registered vehicle must re-key that index too.
    plate: String,
    issued_at: DateTime<Utc>,
}

impl ParkingPass {
    pub(crate) fn new(pid: PassId, kind: PassKind, driver_id: DriverId, plate: String) -> Self {
        Self {
            pid,
            kind,
            driver_id,
            plate,
            issued_at: Utc::now(),
        }
    }

    pub fn pid(&self) -> &PassId {
        &self.pid
    }

    pub fn kind(&self) -> PassKind {
        self.kind
    }

    pub fn driver_id(&self) -> &DriverId {
        &self.driver_id
    }

    /// Plate of the driver's vehicle at issuance.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn rate(&self) -> u32 {
        self.kind.rate()
    }

    /// `rate * hours` rounded to two fraction digits; exact half cents go to the even cent.
    pub fn calculate_fee(&self, hours: f64) -> f64 {
        round_cents(f64::from(self.rate()) * hours)
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}

/// Source of fresh pass identifiers; the coordinator re-draws on collision.
pub trait PassIdSource {
    fn next_pass_id(&mut self) -> PassId;
}

/// Takes the leading hex digits of a random v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidPassIds;

impl PassIdSource for UuidPassIds {
    fn next_pass_id(&mut self) -> PassId {
        let mut raw = uuid::Uuid::new_v4().simple().to_string();
        raw.truncate(PASS_ID_LEN);
        PassId(raw)
    }
}
