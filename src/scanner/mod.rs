//! Scanner module for reading and ordering directory entry names.
//!
//! Reading is a single, non-recursive pass over one directory using walkdir.
//! Names are collected unsorted; ordering is imposed by the caller.

mod names;
mod reader;

pub use names::{name_len, NameCollection};
pub use reader::read_names;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while listing a directory.
#[derive(Error, Debug)]
pub enum ListError {
    /// The directory could not be opened or enumerated: it does not exist,
    /// is not a directory, or access was denied.
    #[error("cannot open directory '{path}'")]
    Unavailable {
        /// The path that was requested
        path: PathBuf,
        /// The underlying OS error
        #[source]
        source: std::io::Error,
    },
}
