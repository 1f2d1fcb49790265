pub mod digital_radar_data;
pub mod digital_radar_data_legacy;
pub mod volume_coverage_pattern;

pub mod raw;
pub use raw::{MessageHeader, MessageType, RedundantChannel};

mod message;
pub use message::{message_frame_len, Message};

mod message_contents;
pub use message_contents::MessageContents;

use crate::result::Result;

/// Decodes a series of NEXRAD Level II messages from a byte buffer.
///
/// Decoding continues until the buffer is exhausted or a message fails to
/// parse; any messages successfully decoded before a failure are returned.
pub fn decode_messages(input: &[u8]) -> Result<Vec<Message<'_>>> {
    let mut cursor = input;
    let mut messages = Vec::new();
    while !cursor.is_empty() {
        match Message::parse(&mut cursor) {
            Ok(message) => messages.push(message),
            Err(_) => break,
        }
    }

    Ok(messages)
}
