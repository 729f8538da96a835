//! Colored terminal logging.
//!
//! One line per event, prefixed with the module that produced it:
//!
//! ```text
//! [retemplate] Rewriting docs/api.html
//! [error] Error in file docs/broken.html
//! ```
//!
//! Use the `log!` macro rather than calling [`log`] directly:
//!
//! ```ignore
//! log!("rebuild"; "Writing {}", output.display());
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stderr, stdout},
    sync::OnceLock,
};

/// Columns assumed when stdout is not a terminal
const DEFAULT_COLUMNS: u16 = 120;

static COLUMNS: OnceLock<usize> = OnceLock::new();

fn columns() -> usize {
    *COLUMNS.get_or_init(|| size().map_or(DEFAULT_COLUMNS, |(w, _)| w) as usize)
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Print `[module] message`.
///
/// The `error` module goes to stderr; everything else to stdout.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let room = columns().saturating_sub(module.len() + "[] ".len());
    let message = fit(module, message, room);

    if is_error(module) {
        let mut err = stderr().lock();
        writeln!(err, "{prefix} {message}").ok();
        err.flush().ok();
    } else {
        let mut out = stdout().lock();
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
        writeln!(out, "{prefix} {message}").ok();
        out.flush().ok();
    }
}

fn is_error(module: &str) -> bool {
    module.eq_ignore_ascii_case("error")
}

/// Progress lines are clipped to the terminal width. Errors and multiline
/// messages are printed whole so no file path is lost.
fn fit<'a>(module: &str, message: &'a str, room: usize) -> &'a str {
    if is_error(module) || message.contains('\n') {
        message
    } else {
        clip(message, room)
    }
}

fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "rebuild" => prefix.bright_blue().bold(),
        "retemplate" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Cut `s` to at most `max` bytes without splitting a character.
fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let end = (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_message_untouched() {
        assert_eq!(clip("File index.html up-to-date", 80), "File index.html up-to-date");
        assert_eq!(clip("exact", 5), "exact");
        assert_eq!(clip("", 0), "");
    }

    #[test]
    fn test_clip_long_message() {
        assert_eq!(clip("Rewriting docs/index.html", 9), "Rewriting");
        assert_eq!(clip("anything", 0), "");
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        // "é" takes two bytes
        assert_eq!(clip("café.html", 4), "caf");
        assert_eq!(clip("café.html", 5), "café");
        assert_eq!(clip("页面", 4), "页");
    }

    #[test]
    fn test_fit_keeps_error_lines_whole() {
        let path = format!("site/{}/index.html", "nested/".repeat(40));
        let message = format!("Error in file {path}");

        assert_eq!(fit("error", &message, 40), message);
        assert_eq!(fit("Error", &message, 40), message);
        assert_eq!(fit("retemplate", &message, 40).len(), 40);
    }

    #[test]
    fn test_fit_keeps_multiline_whole() {
        let message = "Failed to retemplate docs/index.html\ncaused by: delimiter not found";
        assert_eq!(fit("rebuild", message, 10), message);
    }

    #[test]
    fn test_prefix_text() {
        assert_eq!(&*colorize_prefix("Retemplate"), "[Retemplate]");
        assert_eq!(&*colorize_prefix("check"), "[check]");
    }
}
