//! Down-then-across column layout.
//!
//! Names are placed column-major: column 0 is filled top to bottom, then
//! column 1, and so on. The last column may be only partially filled.

use std::ffi::OsStr;
use std::io::{self, Write};

use crate::scanner::{name_len, NameCollection};

use super::colors::{ColorCategory, Palette};

/// Gap between columns, in characters.
pub const SPACING: usize = 2;

/// Grid dimensions for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    pub column_width: usize,
    count: usize,
}

impl Grid {
    /// Size a grid for `count` names of at most `maxlen` bytes in `width` columns.
    ///
    /// Always at least one column, even when a single name is wider than
    /// the terminal.
    pub fn compute(count: usize, maxlen: usize, width: usize) -> Self {
        let column_width = maxlen + SPACING;
        let columns = (width / column_width).max(1);
        let rows = count.div_ceil(columns);

        Self {
            columns,
            rows,
            column_width,
            count,
        }
    }

    /// Index into the sorted names for the cell at (`row`, `col`), or `None`
    /// for the empty tail of a ragged last column.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        let idx = col * self.rows + row;
        (idx < self.count).then_some(idx)
    }
}

/// Write `names` as a colorized grid.
///
/// `categorize` is called once per printed name. Every cell except those in
/// the last grid column is padded to `column_width`; padding sits inside the
/// color wrap. Each row ends with a newline. Nothing is written for an empty
/// collection.
pub fn render<W, F>(
    out: &mut W,
    names: &NameCollection,
    grid: &Grid,
    palette: Palette,
    mut categorize: F,
) -> io::Result<()>
where
    W: Write,
    F: FnMut(&OsStr) -> ColorCategory,
{
    for row in 0..grid.rows {
        for col in 0..grid.columns {
            let Some(name) = grid.index(row, col).and_then(|idx| names.get(idx)) else {
                continue;
            };

            let wrap = palette.wrap(categorize(name));
            if let Some((start, _)) = wrap {
                out.write_all(start.as_bytes())?;
            }

            out.write_all(name.as_encoded_bytes())?;
            if col + 1 < grid.columns {
                let pad = grid.column_width.saturating_sub(name_len(name));
                write!(out, "{:pad$}", "")?;
            }

            if let Some((_, end)) = wrap {
                out.write_all(end.as_bytes())?;
            }
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}
