use crate::messages::digital_radar_data::data_block::{DataBlock, GenericDataBlock};
use crate::messages::digital_radar_data::raw;
use crate::messages::raw::primitive_aliases::Integer4;
use crate::result::Result;
use crate::slice_reader::SliceReader;
use crate::util::get_datetime;
use chrono::{DateTime, Duration, Utc};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Debug;

/// A decoded Message Type 31 "Digital Radar Data (Generic Format)" radial.
///
/// Unlike the legacy Message Type 1 format, a Message Type 31 radial carries a
/// variable number of moment data blocks, located through a pointer table
/// following the header. Blocks are keyed here by their three-character ICD
/// name (`VOL`, `ELV`, `RAD`, `REF`, `VEL`, `SW`, `ZDR`, `PHI`, `RHO`, `CFP`)
/// rather than exposed as fixed struct fields, since which blocks are present
/// varies by volume coverage pattern and dual-pol configuration.
#[derive(Clone, PartialEq)]
pub struct Message<'a> {
    header: Cow<'a, raw::Header>,
    blocks: HashMap<String, DataBlock<'a>>,
}

impl<'a> Message<'a> {
    /// Parses a Message Type 31 radial from its message body, starting at the
    /// generic-format header.
    pub(crate) fn parse(body: &'a [u8]) -> Result<Self> {
        let mut reader = SliceReader::new(body);
        let header = reader.take_ref::<raw::Header>()?;

        let mut pointers = Vec::with_capacity(header.data_block_count.get() as usize);
        for _ in 0..header.data_block_count.get() {
            let pointer = reader.take_ref::<Integer4>()?;
            pointers.push(pointer.get() as usize);
        }

        let mut blocks = HashMap::with_capacity(pointers.len());
        for pointer in pointers {
            if pointer >= body.len() {
                continue;
            }

            let block_bytes = &body[pointer..];
            let mut peek = SliceReader::new(block_bytes);
            let Ok(id) = peek.take_ref::<raw::DataBlockId>() else {
                continue;
            };

            let mut block_reader = SliceReader::new(block_bytes);
            match id.name() {
                "VOL" => {
                    let block = block_reader.take_ref::<raw::VolumeDataBlock>()?;
                    blocks.insert("VOL".to_string(), DataBlock::Volume(Cow::Borrowed(block)));
                }
                "ELV" => {
                    let block = block_reader.take_ref::<raw::ElevationDataBlock>()?;
                    blocks.insert("ELV".to_string(), DataBlock::Elevation(Cow::Borrowed(block)));
                }
                "RAD" => {
                    let block = block_reader.take_ref::<raw::RadialDataBlock>()?;
                    blocks.insert("RAD".to_string(), DataBlock::Radial(Cow::Borrowed(block)));
                }
                name @ ("REF" | "VEL" | "SW" | "ZDR" | "PHI" | "RHO" | "CFP") => {
                    let id = block_reader.take_ref::<raw::DataBlockId>()?;
                    let header = block_reader.take_ref::<raw::GenericDataBlockHeader>()?;

                    let word_size = if header.data_word_size == 16 { 2 } else { 1 };
                    let gate_bytes = header.number_of_data_moment_gates.get() as usize * word_size;
                    let gates = block_reader.take_bytes(gate_bytes)?;

                    blocks.insert(
                        name.to_string(),
                        DataBlock::Generic(GenericDataBlock {
                            id: id.clone(),
                            header: Cow::Borrowed(header),
                            gates: Cow::Borrowed(gates),
                        }),
                    );
                }
                _ => continue,
            }
        }

        Ok(Self {
            header: Cow::Borrowed(header),
            blocks,
        })
    }

    pub fn header(&self) -> &raw::Header {
        &self.header
    }

    /// Collection date and time in UTC.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        get_datetime(
            self.header.date.get(),
            Duration::milliseconds(self.header.time.get() as i64),
        )
    }

    pub fn azimuth_angle(&self) -> f32 {
        self.header.azimuth_angle.get()
    }

    pub fn azimuth_number(&self) -> u16 {
        self.header.azimuth_number.get()
    }

    pub fn elevation_angle(&self) -> f32 {
        self.header.elevation_angle.get()
    }

    pub fn elevation_number(&self) -> u8 {
        self.header.elevation_number
    }

    pub fn radial_status(&self) -> u8 {
        self.header.radial_status
    }

    /// The volume data block (`VOL`), if present on this radial.
    pub fn volume_data(&self) -> Option<&raw::VolumeDataBlock> {
        match self.blocks.get("VOL") {
            Some(DataBlock::Volume(v)) => Some(v),
            _ => None,
        }
    }

    /// The elevation data block (`ELV`), if present on this radial.
    pub fn elevation_data(&self) -> Option<&raw::ElevationDataBlock> {
        match self.blocks.get("ELV") {
            Some(DataBlock::Elevation(v)) => Some(v),
            _ => None,
        }
    }

    /// The radial data block (`RAD`), if present on this radial.
    pub fn radial_data(&self) -> Option<&raw::RadialDataBlock> {
        match self.blocks.get("RAD") {
            Some(DataBlock::Radial(v)) => Some(v),
            _ => None,
        }
    }

    /// Looks up a moment data block by its three-character ICD name, e.g.
    /// `"REF"`, `"VEL"`, `"ZDR"`.
    pub fn moment(&self, name: &str) -> Option<&GenericDataBlock<'a>> {
        match self.blocks.get(name) {
            Some(DataBlock::Generic(g)) => Some(g),
            _ => None,
        }
    }

    pub fn reflectivity(&self) -> Option<&GenericDataBlock<'a>> {
        self.moment("REF")
    }

    pub fn velocity(&self) -> Option<&GenericDataBlock<'a>> {
        self.moment("VEL")
    }

    pub fn spectrum_width(&self) -> Option<&GenericDataBlock<'a>> {
        self.moment("SW")
    }

    pub fn differential_reflectivity(&self) -> Option<&GenericDataBlock<'a>> {
        self.moment("ZDR")
    }

    pub fn differential_phase(&self) -> Option<&GenericDataBlock<'a>> {
        self.moment("PHI")
    }

    pub fn correlation_coefficient(&self) -> Option<&GenericDataBlock<'a>> {
        self.moment("RHO")
    }

    pub fn specific_diff_phase(&self) -> Option<&GenericDataBlock<'a>> {
        self.moment("CFP")
    }

    /// All moment and metadata blocks present on this radial, keyed by their
    /// three-character ICD name.
    pub fn blocks(&self) -> &HashMap<String, DataBlock<'a>> {
        &self.blocks
    }

    /// Convert this message to an owned version with `'static` lifetime.
    pub fn into_owned(self) -> Message<'static> {
        Message {
            header: Cow::Owned(self.header.into_owned()),
            blocks: self
                .blocks
                .into_iter()
                .map(|(k, v)| (k, v.into_owned()))
                .collect(),
        }
    }
}

impl Debug for Message<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitalRadarData")
            .field("azimuth_angle", &self.azimuth_angle())
            .field("azimuth_number", &self.azimuth_number())
            .field("elevation_angle", &self.elevation_angle())
            .field("elevation_number", &self.elevation_number())
            .field("radial_status", &self.radial_status())
            .field("blocks", &self.blocks.keys().collect::<Vec<_>>())
            .finish()
    }
}
