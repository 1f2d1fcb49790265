mod header;
pub use header::Header;

mod elevation_data_block;
pub use elevation_data_block::{decode_angle, decode_angular_velocity, ElevationDataBlock};
