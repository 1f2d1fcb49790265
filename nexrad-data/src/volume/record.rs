//!
//! Decodes the message stream out of a decompressed Archive II record buffer.
//!

use crate::result::Result;
use crate::volume::container::Container;
use nexrad_decode::messages::{decode_messages, Message};

/// Each decompressed bzip2 stream (and the uncompressed gzip body) begins with a 12-byte
/// compression/control record that precedes the first real message.
const COMPRESSION_RECORD_SIZE: usize = 12;

/// Decodes every message out of a fully-decompressed record buffer, skipping the leading
/// compression record for bzip2-sourced buffers.
///
/// Messages are converted to `'static` immediately so the decompressed buffer doesn't need to
/// outlive the returned `Vec` — callers decompress once and keep only the decoded messages.
pub(crate) fn decode_all(container: Container, buf: &[u8]) -> Result<Vec<Message<'static>>> {
    let start = match container {
        Container::Bzip2 => COMPRESSION_RECORD_SIZE.min(buf.len()),
        Container::Gzip => 0,
    };

    let messages = decode_messages(&buf[start..])
        .map_err(|_| crate::result::Error::UnexpectedEof)?
        .into_iter()
        .map(Message::into_owned)
        .collect();

    Ok(messages)
}
