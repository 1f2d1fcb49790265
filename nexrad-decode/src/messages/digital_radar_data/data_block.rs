use crate::messages::digital_radar_data::raw;
use std::borrow::Cow;

/// A gate value decoded from a generic moment data block, following the
/// sentinel-masking rule common to all Message Type 31 moments: a raw value
/// of `0` means the gate was below the SNR threshold, `1` means the gate's
/// echo was range-folded, and any other value is a scaled physical quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaledMomentValue {
    Value(f32),
    BelowThreshold,
    RangeFolded,
}

/// A variable-length moment data block (REF, VEL, SW, ZDR, PHI, RHO, CFP).
///
/// Gate values are stored as raw 8- or 16-bit words and are only decoded into
/// [`ScaledMomentValue`]s on demand via [`decoded_values`](Self::decoded_values).
#[derive(Debug, Clone, PartialEq)]
pub struct GenericDataBlock<'a> {
    pub(crate) id: raw::DataBlockId,
    pub(crate) header: Cow<'a, raw::GenericDataBlockHeader>,
    pub(crate) gates: Cow<'a, [u8]>,
}

impl<'a> GenericDataBlock<'a> {
    /// The three-character moment name, e.g. `REF`, `VEL`, `ZDR`.
    pub fn name(&self) -> &str {
        self.id.name()
    }

    pub fn header(&self) -> &raw::GenericDataBlockHeader {
        &self.header
    }

    /// Raw gate words, 1 or 2 bytes each per [`GenericDataBlockHeader::data_word_size`](raw::GenericDataBlockHeader::data_word_size).
    pub fn raw_gates(&self) -> &[u8] {
        &self.gates
    }

    /// Reconstructs each gate as a raw `u16` word, honoring
    /// [`GenericDataBlockHeader::data_word_size`](raw::GenericDataBlockHeader::data_word_size):
    /// two bytes big-endian per gate when `16`, one byte per gate otherwise.
    ///
    /// A `data_word_size` other than 8 or 16 is treated as 8-bit, since the
    /// ICD reserves no other encoding.
    pub fn raw_words(&self) -> Vec<u16> {
        if self.header.data_word_size == 16 {
            self.gates
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect()
        } else {
            self.gates.iter().map(|&b| b as u16).collect()
        }
    }

    /// Decodes each gate into a physical value, applying the block's scale and
    /// offset and masking the below-threshold and range-folded sentinels.
    pub fn decoded_values(&self) -> Vec<ScaledMomentValue> {
        let scale = self.header.scale.get();
        let offset = self.header.offset.get();

        self.raw_words()
            .into_iter()
            .map(|raw| match raw {
                0 => ScaledMomentValue::BelowThreshold,
                1 => ScaledMomentValue::RangeFolded,
                _ => {
                    if scale == 0.0 {
                        ScaledMomentValue::Value(raw as f32)
                    } else {
                        ScaledMomentValue::Value((raw as f32 - offset) / scale)
                    }
                }
            })
            .collect()
    }

    pub(crate) fn into_owned(self) -> GenericDataBlock<'static> {
        GenericDataBlock {
            id: self.id,
            header: Cow::Owned(self.header.into_owned()),
            gates: Cow::Owned(self.gates.into_owned()),
        }
    }
}

/// Any of the data blocks a Message Type 31 radial's pointer table may reference.
#[derive(Debug, Clone, PartialEq)]
pub enum DataBlock<'a> {
    Volume(Cow<'a, raw::VolumeDataBlock>),
    Elevation(Cow<'a, raw::ElevationDataBlock>),
    Radial(Cow<'a, raw::RadialDataBlock>),
    Generic(GenericDataBlock<'a>),
}

impl<'a> DataBlock<'a> {
    pub(crate) fn into_owned(self) -> DataBlock<'static> {
        match self {
            DataBlock::Volume(v) => DataBlock::Volume(Cow::Owned(v.into_owned())),
            DataBlock::Elevation(v) => DataBlock::Elevation(Cow::Owned(v.into_owned())),
            DataBlock::Radial(v) => DataBlock::Radial(Cow::Owned(v.into_owned())),
            DataBlock::Generic(v) => DataBlock::Generic(v.into_owned()),
        }
    }
}
