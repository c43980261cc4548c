//! Terminal width probe.

use std::io::{self, IsTerminal};

use log::debug;

/// Width used when stdout is not a terminal or the query fails.
pub const FALLBACK_WIDTH: usize = 80;

/// Query the column count of stdout once.
///
/// Falls back to [`FALLBACK_WIDTH`] when stdout is redirected, the query
/// fails, or the reported width is zero.
///
/// On Unix crossterm measures the controlling terminal (`/dev/tty`), not the
/// device stdout points at; the two differ only when stdout is redirected to
/// another terminal.
pub fn terminal_width() -> usize {
    let reported = if io::stdout().is_terminal() {
        match crossterm::terminal::size() {
            Ok((cols, _rows)) => Some(cols),
            Err(e) => {
                debug!("terminal size query failed: {}", e);
                None
            }
        }
    } else {
        None
    };

    resolve_width(reported)
}

/// Apply the fallback rule to a reported width.
pub fn resolve_width(reported: Option<u16>) -> usize {
    match reported {
        Some(cols) if cols > 0 => usize::from(cols),
        _ => FALLBACK_WIDTH,
    }
}
