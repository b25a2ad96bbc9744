//! Logger setup for the binary.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start logging to stderr with the given filter spec.
///
/// The returned handle must be kept alive for the life of the process.
pub fn init(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_str(spec)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    log::debug!("logging initialised with {spec:?}");
    Ok(handle)
}
