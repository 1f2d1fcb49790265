//!
//! Groups decoded radial messages into scans (elevation cuts) and repairs the index lists of
//! concatenated or otherwise corrupted volumes.
//!

use nexrad_decode::messages::{Message, MessageContents};

/// Which message type carries this volume's radials, chosen by majority vote across the decoded
/// message stream. Tolerates files that mix both formats, which happens in a handful of
/// real-world archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialMessageType {
    Legacy,
    Generic,
}

/// Per-radial elevation/azimuth metadata extracted uniformly across message types, used to group
/// radials into scans without matching on the message variant at every call site.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RadialInfo {
    pub elevation_number: u16,
    pub azimuth_number: u16,
}

pub(crate) fn radial_info(message: &Message<'_>) -> Option<RadialInfo> {
    match message.contents() {
        MessageContents::DigitalRadarDataLegacy(m) => Some(RadialInfo {
            elevation_number: m.elevation_number(),
            azimuth_number: m.azimuth_number(),
        }),
        MessageContents::DigitalRadarData(m) => Some(RadialInfo {
            elevation_number: m.elevation_number() as u16,
            azimuth_number: m.azimuth_number(),
        }),
        _ => None,
    }
}

/// Picks the message type whose radials are most numerous in `messages`: type 1 (legacy) or
/// type 31 (generic format).
pub(crate) fn choose_radial_message_type(messages: &[Message<'_>]) -> Option<RadialMessageType> {
    let mut legacy_count = 0usize;
    let mut generic_count = 0usize;
    for message in messages {
        match message.contents() {
            MessageContents::DigitalRadarDataLegacy(_) => legacy_count += 1,
            MessageContents::DigitalRadarData(_) => generic_count += 1,
            _ => {}
        }
    }

    if legacy_count == 0 && generic_count == 0 {
        None
    } else if legacy_count >= generic_count {
        Some(RadialMessageType::Legacy)
    } else {
        Some(RadialMessageType::Generic)
    }
}

/// Indices into `radial_records` (not the full message list) belonging to one elevation cut.
#[derive(Debug, Clone)]
pub struct Scan {
    indices: Vec<usize>,
}

impl Scan {
    /// The radial indices composing this scan, in ascending order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Groups radial indices by elevation number, in order of first appearance, then keeps only the
/// longest trailing run of consecutive indices within each group.
///
/// Concatenated dual-volume files repeat an elevation number at two disjoint index ranges; taking
/// only the run ending at the group's last index discards the earlier, truncated volume.
pub(crate) fn group_scans(radials: &[RadialInfo]) -> Vec<Scan> {
    let mut order: Vec<u16> = Vec::new();
    let mut by_elevation: std::collections::HashMap<u16, Vec<usize>> = std::collections::HashMap::new();

    for (index, radial) in radials.iter().enumerate() {
        by_elevation
            .entry(radial.elevation_number)
            .or_insert_with(|| {
                order.push(radial.elevation_number);
                Vec::new()
            })
            .push(index);
    }

    order
        .into_iter()
        .filter_map(|elevation| by_elevation.remove(&elevation))
        .map(|indices| Scan {
            indices: longest_trailing_run(&indices),
        })
        .collect()
}

/// Walks `indices` from the end and stops as soon as a non-unit step appears, keeping only the
/// consecutive run ending at the last index.
fn longest_trailing_run(indices: &[usize]) -> Vec<usize> {
    if indices.len() <= 1 {
        return indices.to_vec();
    }

    let mut split = indices.len() - 1;
    while split > 0 && indices[split] == indices[split - 1] + 1 {
        split -= 1;
    }

    indices[split..].to_vec()
}
