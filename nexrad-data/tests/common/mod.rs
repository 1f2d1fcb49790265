//! Synthetic Archive II byte construction shared across the integration tests.
//!
//! No real capture files ship with this crate, so every test builds its own minimal,
//! spec-conformant byte layout: a 24-byte volume header, a 12-byte compression record, and a
//! gzip- or bzip2-compressed stream of legacy (Message Type 1) radials.

use bzip2::write::BzEncoder;
use bzip2::Compression as BzCompression;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

pub const VOLUME_HEADER_SIZE: usize = 24;
pub const COMPRESSION_RECORD_SIZE: usize = 12;
pub const MESSAGE_HEADER_SIZE: usize = 28;
pub const LEGACY_RECORD_SIZE: usize = 2432;
pub const LEGACY_BODY_HEADER_SIZE: usize = 100;

/// Builds the 24-byte Archive II volume header.
pub fn volume_header(icao: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(VOLUME_HEADER_SIZE);
    buf.extend_from_slice(b"AR2V0006."); // 9 bytes
    buf.extend_from_slice(b"001"); // 3 bytes, extension number
    buf.extend_from_slice(&20000u32.to_be_bytes()); // date (modified Julian)
    buf.extend_from_slice(&0u32.to_be_bytes()); // time
    let mut icao_bytes = [b' '; 4];
    for (slot, b) in icao_bytes.iter_mut().zip(icao.as_bytes()) {
        *slot = *b;
    }
    buf.extend_from_slice(&icao_bytes);
    assert_eq!(buf.len(), VOLUME_HEADER_SIZE);
    buf
}

/// Builds the 12-byte compression record. `bzip2` selects whether bytes 4..6 read `"BZ"`.
pub fn compression_record(bzip2: bool) -> Vec<u8> {
    let mut buf = vec![0u8; COMPRESSION_RECORD_SIZE];
    if bzip2 {
        buf[4] = b'B';
        buf[5] = b'Z';
    }
    buf
}

pub const REFLECTIVITY_GATES: usize = 200;

/// Builds one fixed-size (2432-byte) legacy Message Type 1 radial carrying reflectivity gate
/// data, at the given elevation/azimuth and collection offset (milliseconds past midnight on
/// day 20000). Gate values vary with the radial's position so the body isn't trivially
/// compressible, matching how a real bzip2-compressed archive stream behaves.
pub fn legacy_radial(elevation_number: u16, azimuth_number: u16, collection_time_ms: u32) -> Vec<u8> {
    let mut msg = Vec::with_capacity(LEGACY_RECORD_SIZE);

    // MessageHeader (28 bytes)
    msg.extend_from_slice(&[0u8; 12]); // rpg_unknown
    msg.extend_from_slice(&0u16.to_be_bytes()); // segment_size
    msg.push(0); // redundant_channel
    msg.push(1); // message_type = 1 (legacy digital radar data)
    msg.extend_from_slice(&1u16.to_be_bytes()); // sequence_number
    msg.extend_from_slice(&20000u16.to_be_bytes()); // date
    msg.extend_from_slice(&0u32.to_be_bytes()); // time
    msg.extend_from_slice(&1u16.to_be_bytes()); // segment_count
    msg.extend_from_slice(&1u16.to_be_bytes()); // segment_number
    assert_eq!(msg.len(), MESSAGE_HEADER_SIZE);

    // digital_radar_data_legacy::raw::Header (100 bytes)
    msg.extend_from_slice(&collection_time_ms.to_be_bytes()); // collection_time
    msg.extend_from_slice(&20000u16.to_be_bytes()); // modified_julian_date
    msg.extend_from_slice(&460u16.to_be_bytes()); // unambiguous_range (46.0km)
    msg.extend_from_slice(&0u16.to_be_bytes()); // azimuth_angle
    msg.extend_from_slice(&azimuth_number.to_be_bytes()); // azimuth_number
    msg.extend_from_slice(&0u16.to_be_bytes()); // radial_status
    msg.extend_from_slice(&3641u16.to_be_bytes()); // elevation_angle (~0.5 deg)
    msg.extend_from_slice(&elevation_number.to_be_bytes()); // elevation_number
    msg.extend_from_slice(&0i16.to_be_bytes()); // surveillance_first_gate_range
    msg.extend_from_slice(&0i16.to_be_bytes()); // doppler_first_gate_range
    msg.extend_from_slice(&1000u16.to_be_bytes()); // surveillance_gate_interval
    msg.extend_from_slice(&0u16.to_be_bytes()); // doppler_gate_interval
    msg.extend_from_slice(&(REFLECTIVITY_GATES as u16).to_be_bytes()); // num_surveillance_gates
    msg.extend_from_slice(&0u16.to_be_bytes()); // num_doppler_gates
    msg.extend_from_slice(&1u16.to_be_bytes()); // sector_number
    msg.extend_from_slice(&0f32.to_be_bytes()); // calibration_constant
    msg.extend_from_slice(&(LEGACY_BODY_HEADER_SIZE as u16).to_be_bytes()); // reflectivity_pointer
    msg.extend_from_slice(&0u16.to_be_bytes()); // velocity_pointer
    msg.extend_from_slice(&0u16.to_be_bytes()); // spectrum_width_pointer
    msg.extend_from_slice(&2u16.to_be_bytes()); // doppler_velocity_resolution
    msg.extend_from_slice(&212u16.to_be_bytes()); // vcp_number
    msg.extend_from_slice(&[0u8; 54]); // spare
    assert_eq!(msg.len(), MESSAGE_HEADER_SIZE + LEGACY_BODY_HEADER_SIZE);

    for i in 0..REFLECTIVITY_GATES {
        let value = (i * 37 + elevation_number as usize * 13 + azimuth_number as usize * 7) % 256;
        msg.push(value as u8);
    }

    msg.resize(LEGACY_RECORD_SIZE, 0);
    msg
}

/// Builds a legacy radial record identical to [`legacy_radial`] but reporting zero surveillance
/// and doppler gates, for exercising the min-meta sparse-sample validity check.
pub fn legacy_radial_zero_gates(elevation_number: u16, azimuth_number: u16, collection_time_ms: u32) -> Vec<u8> {
    let mut msg = Vec::with_capacity(LEGACY_RECORD_SIZE);

    msg.extend_from_slice(&[0u8; 12]);
    msg.extend_from_slice(&0u16.to_be_bytes());
    msg.push(0);
    msg.push(1);
    msg.extend_from_slice(&1u16.to_be_bytes());
    msg.extend_from_slice(&20000u16.to_be_bytes());
    msg.extend_from_slice(&0u32.to_be_bytes());
    msg.extend_from_slice(&1u16.to_be_bytes());
    msg.extend_from_slice(&1u16.to_be_bytes());
    assert_eq!(msg.len(), MESSAGE_HEADER_SIZE);

    msg.extend_from_slice(&collection_time_ms.to_be_bytes());
    msg.extend_from_slice(&20000u16.to_be_bytes());
    msg.extend_from_slice(&460u16.to_be_bytes());
    msg.extend_from_slice(&0u16.to_be_bytes());
    msg.extend_from_slice(&azimuth_number.to_be_bytes());
    msg.extend_from_slice(&0u16.to_be_bytes());
    msg.extend_from_slice(&3641u16.to_be_bytes());
    msg.extend_from_slice(&elevation_number.to_be_bytes());
    msg.extend_from_slice(&0i16.to_be_bytes());
    msg.extend_from_slice(&0i16.to_be_bytes());
    msg.extend_from_slice(&1000u16.to_be_bytes());
    msg.extend_from_slice(&0u16.to_be_bytes());
    msg.extend_from_slice(&0u16.to_be_bytes()); // num_surveillance_gates = 0
    msg.extend_from_slice(&0u16.to_be_bytes()); // num_doppler_gates = 0
    msg.extend_from_slice(&1u16.to_be_bytes());
    msg.extend_from_slice(&0f32.to_be_bytes());
    msg.extend_from_slice(&0u16.to_be_bytes()); // reflectivity_pointer = 0 (no block)
    msg.extend_from_slice(&0u16.to_be_bytes());
    msg.extend_from_slice(&0u16.to_be_bytes());
    msg.extend_from_slice(&2u16.to_be_bytes());
    msg.extend_from_slice(&212u16.to_be_bytes());
    msg.extend_from_slice(&[0u8; 54]);
    assert_eq!(msg.len(), MESSAGE_HEADER_SIZE + LEGACY_BODY_HEADER_SIZE);

    msg.resize(LEGACY_RECORD_SIZE, 0);
    msg
}

/// One elevation cut for [`vcp_message`]: whether it's a super-resolution cut, per the ICD's
/// `super_resolution_control` byte (`7`/`11` for super-resolution, `0` otherwise).
pub struct VcpCut {
    pub super_resolution: bool,
}

/// Builds a fixed-size (2432-byte) Message Type 5 "Volume Coverage Pattern" record with the
/// given elevation cuts.
pub fn vcp_message(pattern_number: u16, cuts: &[VcpCut]) -> Vec<u8> {
    let mut msg = Vec::with_capacity(LEGACY_RECORD_SIZE);

    // MessageHeader (28 bytes)
    msg.extend_from_slice(&[0u8; 12]); // rpg_unknown
    msg.extend_from_slice(&0u16.to_be_bytes()); // segment_size
    msg.push(0); // redundant_channel
    msg.push(5); // message_type = 5 (volume coverage pattern)
    msg.extend_from_slice(&1u16.to_be_bytes()); // sequence_number
    msg.extend_from_slice(&20000u16.to_be_bytes()); // date
    msg.extend_from_slice(&0u32.to_be_bytes()); // time
    msg.extend_from_slice(&1u16.to_be_bytes()); // segment_count
    msg.extend_from_slice(&1u16.to_be_bytes()); // segment_number
    assert_eq!(msg.len(), MESSAGE_HEADER_SIZE);

    // volume_coverage_pattern::raw::Header (22 bytes)
    msg.extend_from_slice(&0u16.to_be_bytes()); // message_size
    msg.extend_from_slice(&2u16.to_be_bytes()); // pattern_type
    msg.extend_from_slice(&pattern_number.to_be_bytes()); // pattern_number
    msg.extend_from_slice(&(cuts.len() as u16).to_be_bytes()); // number_of_elevation_cuts
    msg.push(1); // version
    msg.push(0); // clutter_map_group_number
    msg.push(2); // doppler_velocity_resolution
    msg.push(2); // pulse_width
    msg.extend_from_slice(&0u32.to_be_bytes()); // reserved_1
    msg.extend_from_slice(&0u16.to_be_bytes()); // vcp_sequencing
    msg.extend_from_slice(&0u16.to_be_bytes()); // vcp_supplemental_data
    msg.extend_from_slice(&0u16.to_be_bytes()); // reserved_2

    for (i, cut) in cuts.iter().enumerate() {
        let angle = (i as u16) * 500; // arbitrary, ascending elevation angles
        msg.extend_from_slice(&angle.to_be_bytes()); // elevation_angle
        msg.push(0); // channel_configuration
        msg.push(0); // waveform_type
        msg.push(if cut.super_resolution { 7 } else { 0 }); // super_resolution_control
        msg.push(0); // surveillance_prf_number
        msg.extend_from_slice(&0u16.to_be_bytes()); // surveillance_prf_pulse_count
        msg.extend_from_slice(&0u16.to_be_bytes()); // azimuth_rate
        for _ in 0..18 {
            msg.extend_from_slice(&0i16.to_be_bytes()); // remaining 2-byte fields through `reserved`
        }
    }

    msg.resize(LEGACY_RECORD_SIZE, 0);
    msg
}

/// A deterministic, effectively-incompressible byte sequence long enough that a bzip2-encoded
/// stream of it won't collapse below the container layer's stream-start gap threshold.
fn incompressible_payload(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xff) as u8
        })
        .collect()
}

/// Extra incompressible bytes appended to each stream's body before bzip2 encoding, so the
/// compressed stream stays well above the container layer's stream-start gap threshold even
/// though the radial records it carries are mostly zero-padded and compress away to nothing.
const STREAM_PADDING: usize = 4000;

/// Assembles a multi-stream bzip2-bodied volume file: each inner `Vec` of pre-built message
/// bytes is independently bzip2-encoded, and streams are joined by a 4-byte control word, matching
/// the real Archive II layout the container layer expects.
pub fn bzip2_multi_stream_volume(icao: &str, streams: &[Vec<Vec<u8>>]) -> Vec<u8> {
    let mut rest = Vec::new();
    for (i, stream_messages) in streams.iter().enumerate() {
        // Each decompressed stream carries its own leading compression-record copy, mirroring
        // the one that precedes the first stream at the file level; `record::decode_all` skips it.
        let mut body = vec![0u8; COMPRESSION_RECORD_SIZE];
        for message in stream_messages {
            body.extend_from_slice(message);
        }
        body.extend(incompressible_payload(STREAM_PADDING, 0x9e3779b9u32.wrapping_add(i as u32)));

        let mut encoder = BzEncoder::new(Vec::new(), BzCompression::best());
        encoder.write_all(&body).expect("bzip2 encode");
        let compressed = encoder.finish().expect("bzip2 finish");

        if i > 0 {
            rest.extend_from_slice(&[0u8; 4]); // control word preceding each stream after the first
        }
        rest.extend_from_slice(&compressed);
    }

    let mut file = volume_header(icao);
    file.extend_from_slice(&compression_record(true));
    file.extend_from_slice(&rest);
    file
}

/// Assembles a full, gzip-bodied volume file from a sequence of pre-built message byte strings.
pub fn gzip_volume(icao: &str, messages: &[Vec<u8>]) -> Vec<u8> {
    let mut body = Vec::new();
    for message in messages {
        body.extend_from_slice(message);
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&body).expect("gzip encode");
    let compressed = encoder.finish().expect("gzip finish");

    let mut file = volume_header(icao);
    file.extend_from_slice(&compression_record(false));
    file.extend_from_slice(&compressed);
    file
}

/// Assembles a full, single-stream bzip2-bodied volume file from pre-built message bytes.
pub fn bzip2_volume(icao: &str, messages: &[Vec<u8>]) -> Vec<u8> {
    // The decompressed stream carries its own leading compression-record copy, which
    // `record::decode_all` skips.
    let mut body = vec![0u8; COMPRESSION_RECORD_SIZE];
    for message in messages {
        body.extend_from_slice(message);
    }

    let mut encoder = BzEncoder::new(Vec::new(), BzCompression::default());
    encoder.write_all(&body).expect("bzip2 encode");
    let compressed = encoder.finish().expect("bzip2 finish");

    let mut file = volume_header(icao);
    file.extend_from_slice(&compression_record(true));
    file.extend_from_slice(&compressed);
    file
}
