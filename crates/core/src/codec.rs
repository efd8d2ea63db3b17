//! YAML encoding and decoding of [`Config`] documents.
//!
//! Encoding is deterministic: plugins keep their order and mapping keys inside
//! `args` keep their insertion order. Nested mappings are indented by two
//! spaces. Block sequences are not indented under their parent key, which is
//! how `serde_yaml` emits them (`plugin:\n- tag: server`); decoders accept
//! both layouts.

use std::io::Write;

use crate::error::{Error, Result};
use crate::plugin_definitions::Config;

/// Decodes a (already substituted) document into a [`Config`].
///
/// Absent fields take their empty defaults and a blank document yields
/// `Config::default()`.
///
/// # Errors
///
/// Returns [`Error::Format`] if the bytes are not YAML or the top level is not
/// a configuration mapping.
pub fn decode(document: &[u8]) -> Result<Config> {
    if document.iter().all(u8::is_ascii_whitespace) {
        return Ok(Config::default());
    }

    serde_yaml::from_slice(document).map_err(Error::Format)
}

/// Encodes a [`Config`] into YAML bytes.
///
/// # Errors
///
/// Returns [`Error::Format`] if `args` holds a value YAML cannot represent.
pub fn encode(config: &Config) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    encode_to_writer(&mut buffer, config)?;
    Ok(buffer)
}

/// Encodes a [`Config`] straight into `writer`.
///
/// # Errors
///
/// Returns [`Error::Format`] on a serialization failure; write failures of the
/// underlying writer are reported through the same variant by `serde_yaml`.
pub fn encode_to_writer<W: Write>(writer: W, config: &Config) -> Result<()> {
    serde_yaml::to_writer(writer, config).map_err(Error::Format)
}
