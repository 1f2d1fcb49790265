use crate::messages::digital_radar_data::raw::data_block_id::DataBlockId;
use crate::messages::raw::primitive_aliases::{Integer2, Real4, ScaledSInteger2};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Elevation data block (`data_block_type` = `R`, `data_name` = `ELV`).
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct ElevationDataBlock {
    pub data_block_id: DataBlockId,

    /// Size of this data block in bytes, not including `data_block_id`.
    pub lrtup: Integer2,

    /// Atmospheric attenuation factor, in units of 0.001 dB/km.
    pub atmos: ScaledSInteger2,

    /// Scaling constant used by the RPG to calculate reflectivity, in dB.
    pub calibration_constant: Real4,
}
