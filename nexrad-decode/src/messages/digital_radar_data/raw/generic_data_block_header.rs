use crate::messages::raw::primitive_aliases::{Code1, Integer1, Integer2, Integer4, Real4, ScaledInteger2};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Header preceding the gate payload of a moment data block (REF, VEL, SW,
/// ZDR, PHI, RHO, CFP).
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct GenericDataBlockHeader {
    pub reserved: Integer4,

    /// Number of gates in this radial for this moment.
    pub number_of_data_moment_gates: Integer2,

    /// Range to the first gate's center, in units of 0.001 km.
    pub data_moment_range: ScaledInteger2,

    /// Gate spacing, in units of 0.001 km.
    pub data_moment_range_sample_interval: ScaledInteger2,

    /// Threshold parameter specifying the minimum difference in echo power
    /// between two resolution gates, in units of 0.1 dB.
    pub tover: ScaledInteger2,

    /// SNR threshold for valid data, in units of 0.1 dB.
    pub snr_threshold: ScaledInteger2,

    /// Indicates if this data moment is compressed (0) or range-folded
    /// differently (see ICD Table III-B).
    pub control_flags: Code1,

    /// Size of each gate value in bits: 8 or 16.
    pub data_word_size: Integer1,

    /// Scale factor applied to raw gate values.
    pub scale: Real4,

    /// Offset applied to raw gate values.
    pub offset: Real4,
}
