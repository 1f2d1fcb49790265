//!
//! Message Type 31 "Digital Radar Data (Generic Format)" is the current base data format,
//! replacing Message Type 1 since RDA Build 10.0 (March 2008). Each message carries a single
//! radial located via a variable number of data blocks (volume, elevation, radial, and one or
//! more moment blocks) referenced by a pointer table following the header.
//!
//! This format supports dual-polarization moments (ZDR, PHI, RHO, CFP) and configurable 8- or
//! 16-bit gate resolution, unlike the fixed 1-byte encoding of the legacy format.
//!

mod data_block;
pub use data_block::{DataBlock, GenericDataBlock, ScaledMomentValue};

mod message;
pub use message::Message;

pub(crate) mod raw;
