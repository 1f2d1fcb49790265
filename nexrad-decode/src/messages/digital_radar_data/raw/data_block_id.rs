use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Identifies the type and moment of a data block referenced by a data moment pointer.
#[repr(C)]
#[derive(Clone, PartialEq, Debug, FromBytes, Immutable, KnownLayout)]
pub struct DataBlockId {
    /// `R` for radial data, `D` for data moment blocks.
    pub data_block_type: u8,

    /// Three-character data moment name, e.g. `VOL`, `ELV`, `RAD`, `REF`, `VEL`, `SW `,
    /// `ZDR`, `PHI`, `RHO`, `CFP`.
    pub data_name: [u8; 3],
}

impl DataBlockId {
    /// The data moment name with trailing spaces trimmed.
    pub fn name(&self) -> &str {
        std::str::from_utf8(&self.data_name)
            .unwrap_or("???")
            .trim_end()
    }
}
