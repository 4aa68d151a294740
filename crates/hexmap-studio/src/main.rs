use std::process::ExitCode;

use hexmap_engine::logging::{LoggingConfig, init_logging};
use hexmap_ui::Application;

fn run() -> anyhow::Result<()> {
    Application::new()
        .title("HexMap")
        .size(1200.0, 1000.0)
        .run()?;
    log::info!("hexmap exited cleanly");
    Ok(())
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hexmap runtime error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
