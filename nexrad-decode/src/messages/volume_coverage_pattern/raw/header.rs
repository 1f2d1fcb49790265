use crate::messages::raw::primitive_aliases::{Code1, Code2, Integer1, Integer2, Integer4};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Raw header for Message Type 5 "Volume Coverage Pattern Data".
///
/// Followed by `number_of_elevation_cuts` [`super::elevation_data_block::ElevationDataBlock`]s,
/// one per elevation cut in the pattern.
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct Header {
    /// Size of the message in halfwords, including this header.
    pub message_size: Integer2,

    /// VCP pattern type. Always 2 ("Constant Type") in the current ICD.
    pub pattern_type: Code2,

    /// Volume coverage pattern number.
    pub pattern_number: Integer2,

    /// Number of elevation cuts in this pattern.
    pub number_of_elevation_cuts: Integer2,

    /// VCP version number.
    pub version: Integer1,

    /// Clutter map group number.
    pub clutter_map_group_number: Integer1,

    /// Doppler velocity resolution: 2 = 0.5 m/s, 4 = 1.0 m/s.
    pub doppler_velocity_resolution: Code1,

    /// Pulse width: 2 = short, 4 = long.
    pub pulse_width: Code1,

    pub reserved_1: Integer4,

    /// VCP sequencing flags.
    pub vcp_sequencing: Code2,

    /// VCP supplemental data flags (SAILS, MRLE, MPDA, base tilt cuts).
    pub vcp_supplemental_data: Code2,

    pub reserved_2: Integer2,
}
