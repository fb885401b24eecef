//! Configuration constants and utilities for rawline
//!
//! Everything here is read from the environment; there is no config file.

/// Path meaning "use stdin/stdout instead of a file"
pub const STDIO_PATH: &str = "-";

/// Environment variable naming the default descriptor input path
pub const INPUT_PATH_ENV_VAR: &str = "RAWLINE_INPUT";

/// Environment variable holding the tracing filter for the binary
pub const LOG_LEVEL_ENV_VAR: &str = "RAWLINE_LOG_LEVEL";

/// Filter used when the environment does not set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter used under `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Get the descriptor input path, checking environment variable first, then falling back to stdin
pub fn get_default_input_path() -> String {
    std::env::var_os(INPUT_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| STDIO_PATH.to_string())
}

/// Get the log filter directive, checking environment variable first
pub fn get_log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
