//! Logger setup.

use std::sync::Once;

#[cfg(debug_assertions)]
const LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const LEVEL: log::LevelFilter = log::LevelFilter::Info;

static INIT: Once = Once::new();

/// Installs the global logger, writing to standard error.
///
/// Only the first call has any effect.
pub fn init() {
    INIT.call_once(|| {
        let result = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(LEVEL)
            .chain(std::io::stderr())
            .apply();

        match result {
            Ok(()) => log::debug!("Logging initialized"),
            Err(e) => eprintln!("Failed to initialize logger: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert_eq!(log::max_level(), LEVEL);
    }
}
