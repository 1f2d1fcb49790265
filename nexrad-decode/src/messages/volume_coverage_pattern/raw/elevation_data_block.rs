use crate::messages::raw::primitive_aliases::{Code1, Code2, Integer1, Integer2};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// One elevation cut's configuration within a volume coverage pattern.
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct ElevationDataBlock {
    /// Target elevation angle, coded. See [`decode_angle`].
    pub elevation_angle: Code2,

    /// Channel configuration: 0 = constant phase, 1 = random phase, 2 = SZ2.
    pub channel_configuration: Code1,

    /// Waveform type for this cut.
    pub waveform_type: Code1,

    /// Super resolution control flags.
    pub super_resolution_control: Code1,

    /// Surveillance PRF number.
    pub surveillance_prf_number: Integer1,

    /// Surveillance pulse count per radial.
    pub surveillance_prf_pulse_count: Integer2,

    /// Azimuth rate, coded. See [`decode_angular_velocity`].
    pub azimuth_rate: Code2,

    /// Reflectivity threshold, in units of 0.125 dB above MDS.
    pub reflectivity_threshold: crate::messages::raw::primitive_aliases::SInteger2,

    /// Velocity threshold, in units of 0.125 dB above MDS.
    pub velocity_threshold: crate::messages::raw::primitive_aliases::SInteger2,

    /// Spectrum width threshold, in units of 0.125 dB above MDS.
    pub spectrum_width_threshold: crate::messages::raw::primitive_aliases::SInteger2,

    /// Differential reflectivity threshold, in units of 0.125 dB above MDS.
    pub differential_reflectivity_threshold: crate::messages::raw::primitive_aliases::SInteger2,

    /// Differential phase threshold, in units of 0.125 dB above MDS.
    pub differential_phase_threshold: crate::messages::raw::primitive_aliases::SInteger2,

    /// Correlation coefficient threshold, in units of 0.125 dB above MDS.
    pub correlation_coefficient_threshold: crate::messages::raw::primitive_aliases::SInteger2,

    /// Edge angle for sector 1, coded. See [`decode_angle`].
    pub sector_1_edge_angle: Code2,

    /// Doppler PRF number for sector 1.
    pub sector_1_doppler_prf_number: Integer2,

    /// Doppler pulse count per radial for sector 1.
    pub sector_1_pulse_count: Integer2,

    pub supplemental_data: crate::messages::raw::primitive_aliases::Integer2,

    pub sector_2_edge_angle: Code2,
    pub sector_2_doppler_prf_number: Integer2,
    pub sector_2_pulse_count: Integer2,
    pub ebc_angle: Code2,

    pub sector_3_edge_angle: Code2,
    pub sector_3_doppler_prf_number: Integer2,
    pub sector_3_pulse_count: Integer2,
    pub reserved: Integer2,
}

/// Decodes a binary angle-measurement value (BAM) into degrees, per ICD Table III-A.
pub fn decode_angle(raw: Code2) -> f64 {
    raw.get() as f64 * 180.0 / 32768.0
}

/// Decodes a coded angular velocity value into degrees per second, per ICD Table XI-D.
pub fn decode_angular_velocity(raw: Code2) -> f64 {
    let value = raw.get();
    let magnitude = (value & 0x7FFF) as f64 * 0.001_384_2;
    if value & 0x8000 != 0 {
        -magnitude
    } else {
        magnitude
    }
}
