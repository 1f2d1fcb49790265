use crate::messages::volume_coverage_pattern::pattern_type::PatternType;
use crate::messages::volume_coverage_pattern::pulse_width::PulseWidth;
use crate::messages::volume_coverage_pattern::raw;
use crate::result::Result;
use crate::slice_reader::SliceReader;
use std::borrow::Cow;

/// A decoded Message Type 5/5.1 "Volume Coverage Pattern Data" message.
///
/// Describes the elevation cuts, PRF sequencing, and thresholds the RDA will
/// use for the volume scan currently in progress.
#[derive(Clone, PartialEq, Debug)]
pub struct Message<'a> {
    header: Cow<'a, raw::Header>,
    elevations: Vec<Cow<'a, raw::ElevationDataBlock>>,
}

impl<'a> Message<'a> {
    /// Parses a Message Type 5 body, starting at the VCP header.
    ///
    /// If the body is truncated before all `number_of_elevation_cuts` blocks
    /// can be read, the elevations that were read successfully are kept and a
    /// warning is logged rather than failing the whole volume.
    pub(crate) fn parse(body: &'a [u8]) -> Result<Self> {
        let mut reader = SliceReader::new(body);
        let header = reader.take_ref::<raw::Header>()?;

        let expected = header.number_of_elevation_cuts.get() as usize;
        let mut elevations = Vec::with_capacity(expected);
        for _ in 0..expected {
            match reader.take_ref::<raw::ElevationDataBlock>() {
                Ok(block) => elevations.push(Cow::Borrowed(block)),
                Err(_) => {
                    log::warn!(
                        "message type 5 truncated after {} of {} elevation cuts",
                        elevations.len(),
                        expected
                    );
                    break;
                }
            }
        }

        Ok(Self {
            header: Cow::Borrowed(header),
            elevations,
        })
    }

    pub fn pattern_number(&self) -> u16 {
        self.header.pattern_number.get()
    }

    pub fn pattern_type(&self) -> PatternType {
        self.header.pattern_type.get().into()
    }

    pub fn pulse_width(&self) -> PulseWidth {
        self.header.pulse_width.into()
    }

    /// Doppler velocity resolution in m/s (0.5 or 1.0).
    pub fn doppler_velocity_resolution(&self) -> f64 {
        match self.header.doppler_velocity_resolution {
            4 => 1.0,
            _ => 0.5,
        }
    }

    pub fn elevations(&self) -> &[Cow<'a, raw::ElevationDataBlock>] {
        &self.elevations
    }

    /// Whether elevation cut `index` uses super-resolution (0.5-degree azimuthal sampling with
    /// doubled radial count), per the elevation data block's `super_resolution_control` byte.
    /// Values `7` and `11` indicate that mode; all others don't.
    pub fn is_super_resolution(&self, index: usize) -> Option<bool> {
        self.elevations
            .get(index)
            .map(|e| matches!(e.super_resolution_control, 7 | 11))
    }

    /// Target elevation angles in degrees, in cut order.
    pub fn target_angles(&self) -> Vec<f64> {
        self.elevations
            .iter()
            .map(|e| raw::decode_angle(e.elevation_angle))
            .collect()
    }

    pub fn into_owned(self) -> Message<'static> {
        Message {
            header: Cow::Owned(self.header.into_owned()),
            elevations: self
                .elevations
                .into_iter()
                .map(|e| Cow::Owned(e.into_owned()))
                .collect(),
        }
    }
}
