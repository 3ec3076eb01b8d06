use color_eyre::Result;
use log::LevelFilter;
use std::io::Write;

use crate::config::DEFAULT_LOG_LEVEL;

/// Initialize the logging system for the app.
/// Records go to stderr so stdout carries only the robot report.
/// `level` from the command line wins over `RUST_LOG`.
pub fn setup_logging(level: Option<LevelFilter>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_LEVEL.as_str()),
    );
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}|{:<5}|{}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()?;

    log::debug!("Logger initialized");
    Ok(())
}
