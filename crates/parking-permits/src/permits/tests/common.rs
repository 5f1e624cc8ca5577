use std::collections::VecDeque;

use crate::permits::lot::ParkingLot;
use crate::permits::pass::{PassId, PassIdSource};
use crate::permits::system::ParkingSystem;

/// Hands out scripted ids first, then a numbered fallback sequence.
#[derive(Debug, Default)]
pub(super) struct ScriptedIds {
    scripted: VecDeque<&'static str>,
    counter: u32,
}

impl ScriptedIds {
    pub(super) fn new(scripted: &[&'static str]) -> Self {
        Self {
            scripted: scripted.iter().copied().collect(),
            counter: 0,
        }
    }
}

impl PassIdSource for ScriptedIds {
    fn next_pass_id(&mut self) -> PassId {
        if let Some(raw) = self.scripted.pop_front() {
            return PassId(raw.to_string());
        }
        self.counter += 1;
        PassId(format!("{:08x}", self.counter))
    }
}

pub(super) fn system() -> ParkingSystem<ScriptedIds> {
    ParkingSystem::with_parts(ParkingLot::main(), ScriptedIds::default())
}

pub(super) fn system_with_ids(ids: &[&'static str]) -> ParkingSystem<ScriptedIds> {
    ParkingSystem::with_parts(ParkingLot::main(), ScriptedIds::new(ids))
}

pub(super) fn small_lot_system(capacity: usize) -> ParkingSystem<ScriptedIds> {
    ParkingSystem::with_parts(ParkingLot::new("Test Lot", capacity), ScriptedIds::default())
}

/// Registers `S<n>` with plate `PL-<n>` and issues a student pass.
pub(super) fn enroll(system: &mut ParkingSystem<ScriptedIds>, n: usize) -> String {
    let id = format!("S{n}");
    let plate = format!("pl-{n}");
    system
        .register_driver(&format!("Driver {n}"), &id, &plate, "car")
        .expect("registration succeeds");
    system
        .issue_pass(&id, "student")
        .expect("issuance succeeds");
    plate.to_uppercase()
}
