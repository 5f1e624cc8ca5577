use std::io::{self, BufRead, Write};

use parking_permits::permits::{ParkingError, ParkingSystem, PassIdSource};
use tracing::debug;

const MENU: &[&str] = &[
    "1. Register driver and vehicle",
    "2. Issue parking pass",
    "3. Park a vehicle",
    "4. Remove a vehicle and show fee",
    "5. List all active passes",
    "6. Exit",
];

/// Failures reported to the operator; the loop keeps running after printing one.
#[derive(Debug, thiserror::Error)]
enum DeskError {
    #[error(transparent)]
    Parking(#[from] ParkingError),
    #[error("could not convert hours to a number: '{0}'")]
    Hours(String),
}

/// `None` when input ended before the request was complete.
type Reply = Option<Result<String, DeskError>>;

enum Step {
    Continue,
    Exit,
}

/// Read-eval loop translating menu choices into coordinator calls.
pub struct Desk<'a, S, R, W> {
    system: &'a mut ParkingSystem<S>,
    input: R,
    output: W,
}

impl<'a, S, R, W> Desk<'a, S, R, W>
where
    S: PassIdSource,
    R: BufRead,
    W: Write,
{
    pub fn new(system: &'a mut ParkingSystem<S>, input: R, output: W) -> Self {
        Self {
            system,
            input,
            output,
        }
    }

    /// Runs until the operator exits or input is exhausted. Only I/O failures escape.
    pub fn run(&mut self) -> io::Result<()> {
        while let Step::Continue = self.step()? {}
        self.output.flush()
    }

    fn step(&mut self) -> io::Result<Step> {
        writeln!(self.output)?;
        for line in MENU {
            writeln!(self.output, "{line}")?;
        }
        let Some(choice) = self.prompt("Choice: ")? else {
            return Ok(Step::Exit);
        };

        let reply = match choice.trim() {
            "1" => self.register()?,
            "2" => self.issue()?,
            "3" => self.park()?,
            "4" => self.remove()?,
            "5" => {
                self.list_passes()?;
                return Ok(Step::Continue);
            }
            "6" => return Ok(Step::Exit),
            other => {
                debug!(choice = other, "unrecognized menu choice");
                writeln!(self.output, "Invalid choice")?;
                return Ok(Step::Continue);
            }
        };

        match reply {
            Some(Ok(message)) => writeln!(self.output, "{message}")?,
            Some(Err(err)) => writeln!(self.output, "Error: {err}")?,
            None => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    fn register(&mut self) -> io::Result<Reply> {
        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(None);
        };
        let Some(id) = self.prompt("ID: ")? else {
            return Ok(None);
        };
        let Some(plate) = self.prompt("License plate: ")? else {
            return Ok(None);
        };
        let Some(vehicle_type) = self.prompt("Vehicle type: ")? else {
            return Ok(None);
        };

        Ok(Some(
            self.system
                .register_driver(&name, &id, &plate, &vehicle_type)
                .map(|driver| format!("Driver registered: {}", driver.name()))
                .map_err(DeskError::from),
        ))
    }

    fn issue(&mut self) -> io::Result<Reply> {
        let Some(id) = self.prompt("Driver ID: ")? else {
            return Ok(None);
        };
        let Some(pass_type) = self.prompt("Pass type (student/staff): ")? else {
            return Ok(None);
        };

        Ok(Some(
            self.system
                .issue_pass(&id, &pass_type.trim().to_lowercase())
                .map(|pass| format!("Pass issued: {}", pass.pid()))
                .map_err(DeskError::from),
        ))
    }

    fn park(&mut self) -> io::Result<Reply> {
        let Some(plate) = self.prompt("Plate: ")? else {
            return Ok(None);
        };

        Ok(Some(
            self.system
                .park(&plate)
                .map(|()| "Vehicle parked".to_string())
                .map_err(DeskError::from),
        ))
    }

    fn remove(&mut self) -> io::Result<Reply> {
        let Some(plate) = self.prompt("Plate: ")? else {
            return Ok(None);
        };
        let Some(raw_hours) = self.prompt("Hours parked: ")? else {
            return Ok(None);
        };

        let hours = match raw_hours.trim().parse::<f64>() {
            Ok(hours) => hours,
            Err(_) => return Ok(Some(Err(DeskError::Hours(raw_hours.trim().to_string())))),
        };

        Ok(Some(
            self.system
                .remove(&plate, hours)
                .map(|fee| format!("Fee: {fee:.2}"))
                .map_err(DeskError::from),
        ))
    }

    fn list_passes(&mut self) -> io::Result<()> {
        let views = self.system.pass_views();
        if views.is_empty() {
            return writeln!(self.output, "No active passes");
        }
        for view in views {
            writeln!(
                self.output,
                "{} {} {}",
                view.pid, view.driver_name, view.plate
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
