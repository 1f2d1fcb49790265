use crate::messages::message_contents::MessageContents;
use crate::messages::raw::{MessageHeader, MessageType};
use crate::messages::{digital_radar_data, digital_radar_data_legacy, volume_coverage_pattern};
use crate::result::{Error, Result};
use crate::slice_reader::SliceReader;
use std::borrow::Cow;
use std::fmt::Debug;

/// Every fixed-layout record not sized by its own header occupies a 2432-byte
/// frame: a legacy-era convention (originally the magnetic tape block size)
/// that the ICD still uses for message types 1, 5, and all RDA/RPG metadata
/// types.
const RECORD_SIZE: usize = 2432;

/// The number of bytes a message with this header occupies in its source stream, including the
/// header itself: the same framing [`Message::parse`] uses to advance past each message.
///
/// - Type 31 (generic format): `sizeof(MessageHeader) + segment_size * 2 - 4`.
/// - Type 29 (reserved, metadata-only): `sizeof(MessageHeader) + segment_size`, unless
///   `segment_size` reads the sentinel `65535`, in which case the true size is packed across
///   `segment_count`/`segment_number` as `(segment_count << 16) | segment_number`.
/// - All other types (including 1 and 5): a fixed [`RECORD_SIZE`] frame.
pub fn message_frame_len(header: &MessageHeader) -> usize {
    let header_size = size_of::<MessageHeader>();
    let segment_size = header.segment_size.get() as usize;

    match header.message_type() {
        MessageType::RDADigitalRadarDataGenericFormat => {
            header_size + segment_size.saturating_mul(2).saturating_sub(4)
        }
        MessageType::Reserved5 => {
            let effective_size = if segment_size == 0xFFFF {
                ((header.segment_count.get() as usize) << 16)
                    | header.segment_number.get() as usize
            } else {
                segment_size
            };
            header_size + effective_size
        }
        _ => RECORD_SIZE,
    }
}

/// A single decoded NEXRAD Level II message: its header plus whichever
/// message body the header's type selects.
#[derive(Clone, PartialEq)]
pub struct Message<'a> {
    header: Cow<'a, MessageHeader>,
    contents: MessageContents<'a>,
}

impl<'a> Message<'a> {
    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    pub fn contents(&self) -> &MessageContents<'a> {
        &self.contents
    }

    pub fn into_owned(self) -> Message<'static> {
        Message {
            header: Cow::Owned(self.header.into_owned()),
            contents: self.contents.into_owned(),
        }
    }

    /// Parses one message from the front of `input`, advancing `input` past it.
    ///
    /// The number of bytes consumed is given by [`message_frame_len`].
    pub(crate) fn parse(input: &mut &'a [u8]) -> Result<Message<'a>> {
        if input.is_empty() {
            return Err(Error::UnexpectedEof);
        }

        let mut reader = SliceReader::new(input);
        let header = reader.take_ref::<MessageHeader>()?;
        let header_size = size_of::<MessageHeader>();
        let message_type = header.message_type();

        let total_len = message_frame_len(header).max(header_size).min(input.len());
        let body = &reader.remaining()[..total_len - header_size];

        let contents = match message_type {
            MessageType::RDADigitalRadarData => {
                let mut body_reader = SliceReader::new(body);
                MessageContents::DigitalRadarDataLegacy(digital_radar_data_legacy::Message::parse(
                    &mut body_reader,
                )?)
            }
            MessageType::RDAVolumeCoveragePattern => {
                MessageContents::VolumeCoveragePattern(volume_coverage_pattern::Message::parse(body)?)
            }
            MessageType::RDADigitalRadarDataGenericFormat => {
                MessageContents::DigitalRadarData(digital_radar_data::Message::parse(body)?)
            }
            MessageType::Reserved5 => {
                log::debug!("skipping message type 29, {} bytes", body.len());
                MessageContents::Other
            }
            _ => MessageContents::Other,
        };

        *input = &input[total_len..];

        Ok(Message {
            header: Cow::Borrowed(header),
            contents,
        })
    }
}

impl Debug for Message<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Message")
            .field("message_type", &self.header.message_type())
            .field("contents", &self.contents)
            .finish()
    }
}
