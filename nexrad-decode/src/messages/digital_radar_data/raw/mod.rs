mod header;
pub use header::Header;

pub(crate) mod data_block_id;
pub use data_block_id::DataBlockId;

mod volume_data_block;
pub use volume_data_block::VolumeDataBlock;

mod elevation_data_block;
pub use elevation_data_block::ElevationDataBlock;

mod radial_data_block;
pub use radial_data_block::RadialDataBlock;

mod generic_data_block_header;
pub use generic_data_block_header::GenericDataBlockHeader;
