//! Message body extraction

use crate::error::Result;
use std::path::Path;

/// Read a stored message and extract its plain-text body.
///
/// The file is parsed as an RFC 5322 message (header block + body, possibly
/// multipart). A message with no extractable text body yields an empty
/// string, so it contributes no tokens downstream. Undecodable byte
/// sequences are replaced rather than rejected; only a failed file read is
/// an error.
pub fn read_body<P: AsRef<Path>>(path: P) -> Result<String> {
    let raw = std::fs::read(path)?;

    let body = mail_parser::MessageParser::default()
        .parse(&raw)
        .and_then(|parsed| parsed.body_text(0).map(|text| text.to_string()))
        .unwrap_or_default();

    Ok(body)
}
