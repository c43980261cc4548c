//! Ordered collection of visible entry names.

use std::ffi::{OsStr, OsString};

/// The names gathered from one directory listing.
///
/// Tracks the longest name (in encoded bytes) as entries are pushed, so the
/// renderer can size its columns without a second pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCollection {
    names: Vec<OsString>,
    maxlen: usize,
}

impl NameCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name and update `maxlen`.
    pub fn push(&mut self, name: OsString) {
        self.maxlen = self.maxlen.max(name_len(&name));
        self.names.push(name);
    }

    /// Sort ascending by byte-wise comparison.
    ///
    /// `OsStr` ordering compares the encoded bytes, so this is case-sensitive
    /// and independent of locale.
    pub fn sort(&mut self) {
        self.names.sort_unstable();
    }

    /// Number of names held.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Length of the longest name, 0 when empty.
    pub fn maxlen(&self) -> usize {
        self.maxlen
    }

    pub fn get(&self, index: usize) -> Option<&OsStr> {
        self.names.get(index).map(OsString::as_os_str)
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.names.iter().map(OsString::as_os_str)
    }
}

impl<S: Into<OsString>> FromIterator<S> for NameCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut collection = Self::new();
        for name in iter {
            collection.push(name.into());
        }
        collection
    }
}

/// Display length of a name: its encoded byte count.
pub fn name_len(name: &OsStr) -> usize {
    name.as_encoded_bytes().len()
}
