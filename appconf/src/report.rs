//! Fail-fast reporting for configuration errors

use std::fmt::Display;
use std::io::Write;

/// Exit status used by [`AppConfig::load_or_exit`](crate::AppConfig::load_or_exit).
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Render `message` the way [`exit_with_error`] writes it to stderr.
pub fn format_error(message: impl Display) -> String {
    format!("\n[error]: {message}\n\n")
}

/// Write `message` to stderr and terminate the process with `exit_code`.
///
/// Meant for the top of `main`, so an invalid configuration never lets the
/// application start.
pub fn exit_with_error(message: impl Display, exit_code: i32) -> ! {
    let report = format_error(message);
    let mut stderr = std::io::stderr().lock();
    // Nothing useful is left to do if stderr is gone.
    let _ = stderr.write_all(report.as_bytes());
    let _ = stderr.flush();
    std::process::exit(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_format_error_layout() {
        assert_eq!(format_error("boom"), "\n[error]: boom\n\n");
    }

    #[test]
    fn test_format_config_error() {
        let report = format_error(ConfigError::missing("API_KEY"));
        assert_eq!(
            report,
            "\n[error]: The API_KEY environment variable is required\n\n"
        );
    }
}
