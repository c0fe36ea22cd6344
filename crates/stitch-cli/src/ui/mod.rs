//! Terminal UI utilities for formatted status output.
//!
//! Status messages go to stderr so they never mix with the inherited
//! output of the npm/npx child processes on stdout. Color handling
//! respects `NO_COLOR` and `FORCE_COLOR` and degrades gracefully when
//! stderr is not a terminal.

mod messages;

pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` enables them even in
/// non-TTY environments, otherwise terminal capability decides.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle. `owo-colors`
/// respects NO_COLOR and terminal capabilities on its own; this hook
/// exists for explicit initialization.
pub fn init_colors() {
    let _ = should_use_color();
}
