use crate::demo::{run_demo, DemoArgs};
use crate::menu::Desk;
use clap::{Parser, Subcommand};
use parking_permits::config::AppConfig;
use parking_permits::error::AppError;
use parking_permits::permits::ParkingSystem;
use parking_permits::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Parking Permit Desk",
    about = "Register drivers, issue parking passes and track the Main Lot from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu on stdin/stdout (default command)
    Menu,
    /// Walk through a scripted permit lifecycle and a full lot
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(),
        Command::Demo(args) => run_demo(args),
    }
}

fn run_menu() -> Result<(), AppError> {
    let mut system = ParkingSystem::new();
    info!(
        lot = system.lot().name(),
        capacity = system.lot().capacity(),
        "permit desk ready"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Desk::new(&mut system, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
