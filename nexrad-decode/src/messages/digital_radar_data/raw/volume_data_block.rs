use crate::binary_data::BinaryData;
use crate::messages::digital_radar_data::raw::data_block_id::DataBlockId;
use crate::messages::raw::primitive_aliases::{Integer2, Real4, ScaledInteger2, ScaledSInteger2};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Volume data block (`data_block_type` = `R`, `data_name` = `VOL`).
///
/// Carries volume-wide calibration values common to all radials in the scan.
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct VolumeDataBlock {
    pub data_block_id: DataBlockId,

    /// Size of this data block in bytes, not including `data_block_id`.
    pub lrtup: Integer2,

    /// Major version number.
    pub version_major: u8,

    /// Minor version number.
    pub version_minor: u8,

    /// Latitude of the radar in degrees.
    pub latitude: Real4,

    /// Longitude of the radar in degrees.
    pub longitude: Real4,

    /// Height of the radar site above sea level, in meters.
    pub site_height: crate::messages::raw::primitive_aliases::SInteger2,

    /// Height of the feedhorn above ground level, in meters.
    pub feedhorn_height: Integer2,

    /// Reflectivity calibration correction factor, in dB.
    pub calibration_constant: Real4,

    /// Horizontal channel shv transmitter power, in kW.
    pub horizontal_shv_tx_power: Real4,

    /// Vertical channel shv transmitter power, in kW.
    pub vertical_shv_tx_power: Real4,

    /// Differential reflectivity calibration bias, in dB.
    pub differential_reflectivity_calibration: Real4,

    /// Initial system differential phase, in degrees.
    pub initial_system_differential_phase: ScaledSInteger2,

    /// Volume coverage pattern number in effect.
    pub volume_coverage_pattern_number: Integer2,

    /// Processing status flags for this volume.
    pub processing_status: Integer2,

    /// Weighted-mean ZDR bias estimate, in dB.
    pub zdr_bias_estimate_weighted_mean: ScaledInteger2,

    pub spare: BinaryData<[u8; 6]>,
}
