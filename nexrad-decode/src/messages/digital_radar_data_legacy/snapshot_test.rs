use crate::messages::{decode_messages, MessageContents};

/// Builds a single, fixed 2432-byte legacy (Message Type 1) radial with no gate data.
fn legacy_message_bytes() -> Vec<u8> {
    let mut msg = Vec::with_capacity(2432);

    // MessageHeader (28 bytes)
    msg.extend_from_slice(&[0u8; 12]); // rpg_unknown
    msg.extend_from_slice(&0u16.to_be_bytes()); // segment_size
    msg.push(0); // redundant_channel
    msg.push(1); // message_type = 1
    msg.extend_from_slice(&1u16.to_be_bytes()); // sequence_number
    msg.extend_from_slice(&20000u16.to_be_bytes()); // date
    msg.extend_from_slice(&0u32.to_be_bytes()); // time
    msg.extend_from_slice(&1u16.to_be_bytes()); // segment_count
    msg.extend_from_slice(&1u16.to_be_bytes()); // segment_number

    // digital_radar_data_legacy::raw::Header (100 bytes)
    msg.extend_from_slice(&0u32.to_be_bytes()); // collection_time
    msg.extend_from_slice(&20000u16.to_be_bytes()); // modified_julian_date
    msg.extend_from_slice(&460u16.to_be_bytes()); // unambiguous_range (46.0 km)
    msg.extend_from_slice(&16384u16.to_be_bytes()); // azimuth_angle (90 deg)
    msg.extend_from_slice(&45u16.to_be_bytes()); // azimuth_number
    msg.extend_from_slice(&1u16.to_be_bytes()); // radial_status
    msg.extend_from_slice(&3641u16.to_be_bytes()); // elevation_angle (~0.5 deg)
    msg.extend_from_slice(&1u16.to_be_bytes()); // elevation_number
    msg.extend_from_slice(&0i16.to_be_bytes()); // surveillance_first_gate_range
    msg.extend_from_slice(&0i16.to_be_bytes()); // doppler_first_gate_range
    msg.extend_from_slice(&1000u16.to_be_bytes()); // surveillance_gate_interval
    msg.extend_from_slice(&250u16.to_be_bytes()); // doppler_gate_interval
    msg.extend_from_slice(&460u16.to_be_bytes()); // num_surveillance_gates
    msg.extend_from_slice(&920u16.to_be_bytes()); // num_doppler_gates
    msg.extend_from_slice(&1u16.to_be_bytes()); // sector_number
    msg.extend_from_slice(&58.5f32.to_be_bytes()); // calibration_constant
    msg.extend_from_slice(&100u16.to_be_bytes()); // reflectivity_pointer
    msg.extend_from_slice(&560u16.to_be_bytes()); // velocity_pointer
    msg.extend_from_slice(&1480u16.to_be_bytes()); // spectrum_width_pointer
    msg.extend_from_slice(&2u16.to_be_bytes()); // doppler_velocity_resolution (0.5 m/s)
    msg.extend_from_slice(&212u16.to_be_bytes()); // vcp_number
    msg.extend_from_slice(&[0u8; 54]); // spare
    assert_eq!(msg.len(), 128);

    // Gate data: reflectivity (460 bytes), velocity (920 bytes), spectrum width (920 bytes).
    for i in 0..460 {
        msg.push((i % 256) as u8);
    }
    for i in 0..920 {
        msg.push(((i * 3) % 256) as u8);
    }
    for i in 0..920 {
        msg.push(((i * 5) % 256) as u8);
    }

    msg.resize(2432, 0);
    msg
}

/// Tests decoding of a single Digital Radar Data Legacy message (type 1).
#[test]
fn test_decode_digital_radar_data_legacy() {
    let bytes = legacy_message_bytes();
    let messages = decode_messages(&bytes).expect("decodes successfully");

    assert_eq!(messages.len(), 1, "expected exactly one message");

    let MessageContents::DigitalRadarDataLegacy(radial) = messages[0].contents() else {
        panic!("expected a legacy digital radar data message");
    };

    assert_eq!(radial.elevation_number(), 1);
    assert_eq!(radial.azimuth_number(), 45);
    assert_eq!(radial.vcp_number(), 212);
    assert_eq!(radial.unambiguous_range_km(), 46.0);
    assert_eq!(radial.num_surveillance_gates(), 460);
    assert_eq!(radial.num_doppler_gates(), 920);
    assert_eq!(radial.doppler_velocity_resolution(), 0.5);

    let reflectivity = radial.reflectivity_gates().expect("has reflectivity gates");
    assert_eq!(reflectivity.len(), 460);
    assert_eq!(reflectivity[0], 0);
    assert_eq!(reflectivity[1], 1);

    let velocity = radial.velocity_gates().expect("has velocity gates");
    assert_eq!(velocity.len(), 920);

    let spectrum_width = radial
        .spectrum_width_gates()
        .expect("has spectrum width gates");
    assert_eq!(spectrum_width.len(), 920);
}
