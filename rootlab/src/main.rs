use std::{io, process::ExitCode};

use rootlab::Settings;
use tracing::{Level, error};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match rootlab::run(&Settings::default(), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}
