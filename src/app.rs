//! One listing run: read, sort, probe width, render.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use log::debug;

use crate::scanner::read_names;
use crate::ui::{classify, render, resolve_width, terminal_width, ColorCategory, Grid, Palette};

/// Configuration for a listing run.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Directory to list
    pub path: PathBuf,
    /// Fixed width in columns; probed from the terminal when `None`
    pub width: Option<u16>,
    /// Wrap names in ANSI color sequences
    pub color: bool,
}

impl ListOptions {
    /// Create options with default values: probed width, colors on.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            width: None,
            color: true,
        }
    }

    /// Set a fixed width
    pub fn with_width(mut self, width: Option<u16>) -> Self {
        self.width = width;
        self
    }

    /// Enable or disable colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Width to lay out against. The terminal is queried at most once.
    fn resolve_width(&self) -> usize {
        match self.width {
            Some(cols) => resolve_width(Some(cols)),
            None => terminal_width(),
        }
    }
}

/// List `options.path` into `out`.
///
/// Fails only when the directory itself cannot be read or `out` rejects a
/// write. An empty listing writes nothing.
pub fn run<W: Write>(options: &ListOptions, out: &mut W) -> Result<()> {
    debug!("listing {}", options.path.display());

    let mut names = read_names(&options.path)?;
    if names.is_empty() {
        return Ok(());
    }
    names.sort();

    let width = options.resolve_width();
    let grid = Grid::compute(names.len(), names.maxlen(), width);
    debug!(
        "width {}: {} columns x {} rows (column width {})",
        width, grid.columns, grid.rows, grid.column_width
    );

    let palette = Palette::from_enabled(options.color);
    render(out, &names, &grid, palette, |name| match palette {
        Palette::Ansi => classify(&options.path, name),
        Palette::Plain => ColorCategory::Default,
    })?;
    out.flush()?;

    Ok(())
}
