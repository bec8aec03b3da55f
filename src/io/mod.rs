//! Wireframe file I/O.
//!
//! This module provides functions for loading and saving wireframes as
//! plain-text node/edge listings.
//!
//! # Usage
//!
//! ```no_run
//! use tracery::io::{load, save};
//!
//! let wire = load("model.txt").unwrap();
//! save(&wire, "copy.txt").unwrap();
//! ```
//!
//! Format-specific functions live in [`text`]; [`load`] and [`save`]
//! dispatch on the file extension.

pub mod text;

use std::path::Path;

use crate::error::{Result, WireError};
use crate::wire::Wireframe;

/// Supported wireframe file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain-text node/edge listing.
    Text,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(Format::Text),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Load a wireframe from a file with format detection by extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Wireframe> {
    let path = path.as_ref();
    match Format::from_path(path) {
        Some(Format::Text) => text::load(path),
        None => Err(unsupported(path)),
    }
}

/// Save a wireframe to a file with format detection by extension.
pub fn save<P: AsRef<Path>>(wire: &Wireframe, path: P) -> Result<()> {
    let path = path.as_ref();
    match Format::from_path(path) {
        Some(Format::Text) => text::save(wire, path),
        None => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> WireError {
    WireError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    }
}
