use std::str::FromStr;
use std::time::SystemTime;

use log::LevelFilter;

/// installs the global logger. Level comes from `NOTES_LOG_LEVEL`, defaulting to info
pub fn init_logger() {
    let level = std::env::var("NOTES_LOG_LEVEL")
        .ok()
        .and_then(|l| LevelFilter::from_str(&l).ok())
        .unwrap_or(LevelFilter::Info);
    let res = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply();
    if let Err(e) = res {
        eprintln!("Failed to set up logging: {e}");
    }
}
