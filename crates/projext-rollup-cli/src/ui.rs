//! Terminal output helpers.
//!
//! Status messages go to stderr. Colors are disabled by `--no-color`,
//! `NO_COLOR`, or when stderr isn't attended.

use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether the helpers below print colors
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

fn colors() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub fn warning(message: &str) {
    if colors() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("warning: {message}");
    }
}

/// One `targets` row: the name padded to `width`, then the type
pub fn target_row(name: &str, target_type: &str, width: usize) -> String {
    let padded = format!("{name:<width$}");
    if colors() {
        format!("{}  {}", padded.cyan().bold(), target_type.dimmed())
    } else {
        format!("{padded}  {target_type}")
    }
}
