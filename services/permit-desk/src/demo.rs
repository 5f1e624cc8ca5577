use std::fmt::Display;
use std::io::Write;

use clap::Args;
use parking_permits::error::AppError;
use parking_permits::permits::{ParkingError, ParkingSystem, PassIdSource, MAIN_LOT_CAPACITY};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the final registry snapshot as JSON after the walkthrough.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut system = ParkingSystem::new();
    walkthrough(&mut system, args.json, stdout.lock())
}

/// Scripted tour of a student's permit lifecycle followed by filling the lot.
pub fn walkthrough<S, W>(
    system: &mut ParkingSystem<S>,
    json: bool,
    mut out: W,
) -> Result<(), AppError>
where
    S: PassIdSource,
    W: Write,
{
    info!(capacity = system.lot().capacity(), "starting permit desk demo");
    writeln!(out, "Parking permit demo ({})", system.lot().name())?;

    let registered = system
        .register_driver("Ann Lee", "S1", "abc-123", "student")
        .map(|driver| format!("{} with plate {}", driver.name(), driver.vehicle().plate()));
    report(&mut out, "register Ann Lee / S1 / abc-123", registered)?;

    let issued = system
        .issue_pass("S1", "student")
        .map(|pass| format!("{} pass {}", pass.kind().label(), pass.pid()));
    report(&mut out, "issue student pass to S1", issued)?;

    let parked = system.park("abc-123").map(|()| "parked");
    report(&mut out, "park abc-123", parked)?;

    let fee = system
        .remove("ABC-123", 2.5)
        .map(|fee| format!("fee {fee:.2}"));
    report(&mut out, "remove ABC-123 after 2.5 hours", fee)?;

    let again = system
        .remove("ABC-123", 1.0)
        .map(|fee| format!("fee {fee:.2}"));
    report(&mut out, "remove ABC-123 again", again)?;

    writeln!(
        out,
        "\nFilling the lot with {} staff vehicles",
        MAIN_LOT_CAPACITY + 1
    )?;
    for n in 1..=MAIN_LOT_CAPACITY + 1 {
        let plate = format!("stf-{n:02}");
        let outcome = enroll_and_park(system, n, &plate);
        report(&mut out, &format!("enroll and park {plate}"), outcome)?;
    }

    if json {
        writeln!(out, "\n{}", system.snapshot().to_pretty_json()?)?;
    } else {
        writeln!(out, "\nActive passes")?;
        for view in system.pass_views() {
            writeln!(
                out,
                "- {} {} {} ({})",
                view.pid,
                view.driver_name,
                view.plate,
                view.kind.label()
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

fn enroll_and_park<S: PassIdSource>(
    system: &mut ParkingSystem<S>,
    n: usize,
    plate: &str,
) -> Result<String, ParkingError> {
    let id = format!("E{n}");
    system.register_driver(&format!("Staff Member {n}"), &id, plate, "car")?;
    system.issue_pass(&id, "staff")?;
    system.park(plate)?;
    Ok(format!(
        "occupancy {}/{}",
        system.lot().occupancy(),
        system.lot().capacity()
    ))
}

fn report<W, T, E>(out: &mut W, step: &str, outcome: Result<T, E>) -> std::io::Result<()>
where
    W: Write,
    T: Display,
    E: Display,
{
    match outcome {
        Ok(detail) => writeln!(out, "- {step}: {detail}"),
        Err(err) => writeln!(out, "- {step}: Error: {err}"),
    }
}
