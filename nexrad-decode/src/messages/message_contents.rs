use crate::messages::{digital_radar_data, digital_radar_data_legacy, volume_coverage_pattern};
use std::fmt::Debug;

/// The decoded body of a message, by message type.
///
/// Only the message types exercised by archive volume decoding are fully
/// parsed. All other RDA/RPG message types (status data, adaptation data,
/// clutter maps, console messages, and so on) are acknowledged by header
/// alone and surface as [`MessageContents::Other`].
#[derive(Clone, PartialEq)]
pub enum MessageContents<'a> {
    /// Message Type 1: legacy base data radial.
    DigitalRadarDataLegacy(digital_radar_data_legacy::Message<'a>),
    /// Message Type 5: volume coverage pattern.
    VolumeCoveragePattern(volume_coverage_pattern::Message<'a>),
    /// Message Type 31: generic format base data radial.
    DigitalRadarData(digital_radar_data::Message<'a>),
    /// Any other message type, parsed only far enough to advance the cursor.
    Other,
}

impl Debug for MessageContents<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageContents::DigitalRadarDataLegacy(m) => m.fmt(f),
            MessageContents::VolumeCoveragePattern(m) => m.fmt(f),
            MessageContents::DigitalRadarData(m) => m.fmt(f),
            MessageContents::Other => f.write_str("Other"),
        }
    }
}

impl MessageContents<'_> {
    pub fn into_owned(self) -> MessageContents<'static> {
        match self {
            MessageContents::DigitalRadarDataLegacy(m) => {
                MessageContents::DigitalRadarDataLegacy(m.into_owned())
            }
            MessageContents::VolumeCoveragePattern(m) => {
                MessageContents::VolumeCoveragePattern(m.into_owned())
            }
            MessageContents::DigitalRadarData(m) => MessageContents::DigitalRadarData(m.into_owned()),
            MessageContents::Other => MessageContents::Other,
        }
    }
}
