use crate::messages::digital_radar_data::raw::data_block_id::DataBlockId;
use crate::messages::raw::primitive_aliases::{Integer2, Real4, ScaledInteger2};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Radial data block (`data_block_type` = `R`, `data_name` = `RAD`).
///
/// Carries per-radial noise and calibration values that apply to every
/// moment block in the same radial.
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct RadialDataBlock {
    pub data_block_id: DataBlockId,

    /// Size of this data block in bytes, not including `data_block_id`.
    pub lrtup: Integer2,

    /// Unambiguous range, in units of 0.1 km.
    pub unambiguous_range: ScaledInteger2,

    /// Noise level for the horizontal channel, in dBm.
    pub horizontal_channel_noise_level: Real4,

    /// Noise level for the vertical channel, in dBm.
    pub vertical_channel_noise_level: Real4,

    /// Nyquist velocity, in units of 0.01 m/s.
    pub nyquist_velocity: ScaledInteger2,

    /// Radial flags, reserved for future use.
    pub radial_flags: Integer2,

    /// Calibration constant for the horizontal channel, in dB.
    pub horizontal_channel_calibration_constant: Real4,

    /// Calibration constant for the vertical channel, in dB.
    pub vertical_channel_calibration_constant: Real4,
}
