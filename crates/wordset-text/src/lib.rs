//! Text front end for `wordset-core`.
//!
//! Everything here turns files and lines into the normalized, non-empty
//! strings a [`StringSet`](wordset_core::StringSet) expects, and reads the
//! answers back out.
//!
//! # Architecture
//!
//! - [`normalize`] -- Letter filtering, case folding and line splitting
//! - [`wordlist`] -- Token and dictionary readers over `BufRead` and files
//! - [`speller`] -- The `Speller` trait and a dictionary-backed checker
//! - [`distinct`] -- Distinct-word collection into a set

pub mod distinct;
pub mod normalize;
pub mod speller;
pub mod wordlist;

use std::io;
use std::path::{Path, PathBuf};

/// Error type for reading word sources.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// A named file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// An anonymous reader failed mid-stream.
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

impl TextError {
    /// Attach `path` to an anonymous read failure.
    pub fn at(self, path: &Path) -> Self {
        match self {
            TextError::Read(source) => TextError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}
