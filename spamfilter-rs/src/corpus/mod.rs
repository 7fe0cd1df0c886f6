//! Corpus access
//!
//! Reads labeled mail corpora from disk: directory enumeration and message
//! body extraction.

pub mod message;
pub mod scan;

pub use message::read_body;
pub use scan::list_messages;

use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Read the body of every message in a corpus directory.
///
/// A failed read aborts the whole load; there is no partial-corpus fallback.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let paths = scan::list_messages(dir.as_ref())?;

    let mut bodies = Vec::with_capacity(paths.len());
    for path in &paths {
        bodies.push(message::read_body(path)?);
    }

    info!(
        "Loaded {} messages from {}",
        bodies.len(),
        dir.as_ref().display()
    );

    Ok(bodies)
}
