/// Environment variable that switches on `[VERBOSE]` diagnostics.
pub const VERBOSE_ENV: &str = "VERBUMP_VERBOSE";

pub fn verbose_enabled() -> bool {
    std::env::var_os(VERBOSE_ENV).is_some()
}

/// Print a diagnostic line to stderr when verbose output is enabled.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::utils::logging::verbose_enabled() {
            eprintln!("[VERBOSE] {}", format_args!($($arg)*));
        }
    };
}
