mod cli;
mod demo;
mod menu;

pub use demo::walkthrough;
pub use menu::Desk;

use parking_permits::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
