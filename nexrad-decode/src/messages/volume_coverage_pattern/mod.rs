//!
//! Message Type 5 "Volume Coverage Pattern Data" describes the elevation cuts, scan strategy,
//! and PRF sequencing the RDA uses for the volume scan in progress. It typically precedes the
//! first Message Type 31/1 radial of a new volume, but is not repeated for every elevation.
//!

mod pattern_type;
pub use pattern_type::PatternType;

mod pulse_width;
pub use pulse_width::PulseWidth;

mod message;
pub use message::Message;

pub(crate) mod raw;
