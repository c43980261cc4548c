//! File type classification and ANSI color codes for listing output.
//!
//! Each entry is classified from its own metadata (symlinks are not
//! followed) into a [`ColorCategory`], which maps to an SGR escape sequence.

use std::ffi::OsStr;
use std::fs::Metadata;
use std::path::Path;

/// SGR sequence that resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Substrings that mark a name as an archive.
const ARCHIVE_MARKERS: [&[u8]; 3] = [b".tar", b".gz", b".zip"];

/// Owner execute permission bit.
#[cfg(unix)]
const OWNER_EXEC: u32 = 0o100;

/// Display category of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Directory,
    Symlink,
    /// Character or block device, FIFO, or socket
    SpecialDevice,
    Executable,
    Archive,
    Default,
}

impl ColorCategory {
    /// The set-color sequence for this category, `None` for [`ColorCategory::Default`].
    pub fn sgr(self) -> Option<&'static str> {
        match self {
            ColorCategory::Directory => Some("\x1b[1;34m"),     // Bold blue
            ColorCategory::Executable => Some("\x1b[1;32m"),    // Bold green
            ColorCategory::Archive => Some("\x1b[1;31m"),       // Bold red
            ColorCategory::Symlink => Some("\x1b[1;35m"),       // Bold magenta
            ColorCategory::SpecialDevice => Some("\x1b[7m"),    // Reverse video
            ColorCategory::Default => None,
        }
    }

    /// Classify from already-fetched metadata.
    ///
    /// `metadata` must come from `symlink_metadata` so that links are seen
    /// as links. The first matching rule wins.
    pub fn from_metadata(name: &OsStr, metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();

        if file_type.is_dir() {
            return ColorCategory::Directory;
        }
        if file_type.is_symlink() {
            return ColorCategory::Symlink;
        }
        if is_special(metadata) {
            return ColorCategory::SpecialDevice;
        }
        if is_owner_executable(metadata) {
            return ColorCategory::Executable;
        }
        if is_archive_name(name) {
            return ColorCategory::Archive;
        }
        ColorCategory::Default
    }
}

/// Classify the entry `name` inside `dir`.
///
/// Re-reads metadata on every call. If the entry cannot be inspected (for
/// instance it was removed after the listing was read) the result is
/// [`ColorCategory::Default`].
pub fn classify(dir: &Path, name: &OsStr) -> ColorCategory {
    match std::fs::symlink_metadata(dir.join(name)) {
        Ok(metadata) => ColorCategory::from_metadata(name, &metadata),
        Err(e) => {
            log::debug!("no metadata for {:?}: {}", name, e);
            ColorCategory::Default
        }
    }
}

/// Archive rule: `.tar`, `.gz` or `.zip` anywhere in the name.
pub fn is_archive_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    ARCHIVE_MARKERS
        .iter()
        .any(|marker| bytes.windows(marker.len()).any(|w| w == *marker))
}

#[cfg(unix)]
fn is_special(metadata: &Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;

    let ft = metadata.file_type();
    ft.is_char_device() || ft.is_block_device() || ft.is_fifo() || ft.is_socket()
}

#[cfg(not(unix))]
fn is_special(_metadata: &Metadata) -> bool {
    false
}

#[cfg(unix)]
fn is_owner_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & OWNER_EXEC != 0
}

#[cfg(not(unix))]
fn is_owner_executable(_metadata: &Metadata) -> bool {
    false
}

/// Whether categories are turned into escape sequences at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Ansi,
    Plain,
}

impl Palette {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Palette::Ansi
        } else {
            Palette::Plain
        }
    }

    /// The (start, end) wrap for a category, `None` when no wrapping applies.
    pub fn wrap(self, category: ColorCategory) -> Option<(&'static str, &'static str)> {
        match self {
            Palette::Ansi => category.sgr().map(|start| (start, RESET)),
            Palette::Plain => None,
        }
    }
}
