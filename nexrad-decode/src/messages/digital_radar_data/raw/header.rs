use crate::messages::raw::primitive_aliases::{Code1, Integer1, Integer2, Integer4, Real4};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Raw header for Message Type 31 "Digital Radar Data (Generic Format)".
///
/// Followed immediately by `data_block_count` 4-byte big-endian pointers into
/// the message body, each identifying the offset of a data block described by
/// [`super::data_block_id::DataBlockId`].
///
/// # ICD Reference
/// RDA/RPG ICD Table III-B "Digital Radar Generic Format Data Message Type 31".
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct Header {
    /// Radar site identifier, 4 characters.
    pub radar_identifier: [u8; 4],

    /// Collection time in milliseconds past midnight GMT.
    pub time: Integer4,

    /// Modified Julian date (days since 1 January 1970).
    pub date: Integer2,

    /// Azimuth number within the current elevation (1-indexed).
    pub azimuth_number: Integer2,

    /// Azimuth angle in degrees (0.0 to 359.956).
    pub azimuth_angle: Real4,

    /// 0 = uncompressed, 1 = compressed via run-length encoding.
    pub compression_indicator: Code1,

    /// Spare byte.
    pub spare: u8,

    /// Length of the radial in bytes, including this header.
    pub radial_length: Integer2,

    /// Azimuthal resolution: 1 = 0.5 degrees, 2 = 1.0 degree.
    pub azimuth_resolution_spacing: Code1,

    /// Radial status indicator.
    pub radial_status: Code1,

    /// Elevation number within the volume scan (1-indexed).
    pub elevation_number: Integer1,

    /// Sector number within a cut in a cutting plane, for SAILS/MESO-SAILS scans.
    pub cut_sector_number: Integer1,

    /// Elevation angle in degrees.
    pub elevation_angle: Real4,

    /// Spot blanking status for the current radial, elevation, and volume.
    pub radial_spot_blanking_status: Code1,

    /// Azimuth indexing value, in units of 0.01 degrees; 0 means no indexing.
    pub azimuth_indexing_mode: crate::messages::raw::primitive_aliases::ScaledInteger1,

    /// Number of data moment blocks pointed to from this radial.
    pub data_block_count: Integer2,
}
