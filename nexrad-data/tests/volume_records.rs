mod common;

use nexrad_data::volume::VolumeFile;

#[test]
fn scan_info_reports_reflectivity_geometry() {
    let messages = vec![common::legacy_radial(1, 1, 0), common::legacy_radial(1, 2, 1000)];
    let bytes = common::gzip_volume("KDMX", &messages);
    let volume = VolumeFile::new(bytes).expect("volume decodes");

    let info = volume.scan_info(None);
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].moments, vec!["REF".to_string()]);
    assert_eq!(info[0].ngates, vec![common::REFLECTIVITY_GATES as u32]);
}

#[test]
fn get_data_returns_decoded_reflectivity_gates() {
    let messages = vec![common::legacy_radial(5, 1, 0)];
    let bytes = common::gzip_volume("KDMX", &messages);
    let volume = VolumeFile::new(bytes).expect("volume decodes");

    let raw = volume.get_data("REF", common::REFLECTIVITY_GATES, None, true);
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].len(), common::REFLECTIVITY_GATES);
    // First gate value for elevation 5, azimuth 1: (0*37 + 5*13 + 1*7) % 256 = 72.
    assert_eq!(raw[0][0], Some(72.0));

    let decoded = volume.get_data("REF", common::REFLECTIVITY_GATES, None, false);
    assert_eq!(decoded.len(), 1);
    // Values 0 and 1 are sentinels (below-threshold / range-folded) and mask to None even in
    // non-raw mode; everything else passes through as-is for this message type.
    for (raw_value, decoded_value) in raw[0].iter().zip(decoded[0].iter()) {
        match raw_value {
            Some(v) if *v <= 1.0 => assert_eq!(*decoded_value, None),
            Some(v) => assert_eq!(*decoded_value, Some(*v)),
            None => unreachable!(),
        }
    }
}

#[test]
fn get_times_reports_start_and_offsets() {
    let messages = vec![
        common::legacy_radial(1, 1, 0),
        common::legacy_radial(1, 2, 5000),
        common::legacy_radial(1, 3, 9500),
    ];
    let bytes = common::gzip_volume("KDMX", &messages);
    let volume = VolumeFile::new(bytes).expect("volume decodes");

    let (start, offsets) = volume.get_times(None);
    assert!(start.is_some());
    assert_eq!(offsets.len(), 1);
    assert_eq!(offsets[0].len(), 3);
    assert!((offsets[0][0] - 0.0).abs() < 1e-6);
    assert!((offsets[0][1] - 5.0).abs() < 1e-6);
    assert!((offsets[0][2] - 9.5).abs() < 1e-6);
}

#[test]
fn get_target_angles_rounds_legacy_elevation() {
    let messages = vec![common::legacy_radial(1, 1, 0)];
    let bytes = common::gzip_volume("KDMX", &messages);
    let volume = VolumeFile::new(bytes).expect("volume decodes");

    // elevation_angle raw 3641 -> 3641.0 * 180.0 / 32768.0 ~= 19.99, rounded to 1 decimal.
    let angles = volume.get_target_angles(None);
    assert_eq!(angles.len(), 1);
    assert!((angles[0] - 20.0).abs() < 0.2);
}

#[test]
fn legacy_volumes_have_zero_nyquist_velocity_and_no_vcp() {
    let messages = vec![common::legacy_radial(1, 1, 0)];
    let bytes = common::gzip_volume("KDMX", &messages);
    let volume = VolumeFile::new(bytes).expect("volume decodes");

    assert_eq!(volume.get_nyquist_vel(None), vec![0.0]);
    assert_eq!(volume.get_vcp_pattern(), None);
    assert_eq!(volume.location(), (0.0, 0.0, 0.0));
}

#[test]
fn get_unambig_range_converts_legacy_km_to_meters() {
    let messages = vec![common::legacy_radial(1, 1, 0)];
    let bytes = common::gzip_volume("KDMX", &messages);
    let volume = VolumeFile::new(bytes).expect("volume decodes");

    // unambiguous_range raw 460 -> 46.0 km -> 46000 m.
    let ranges = volume.get_unambig_range(None);
    assert_eq!(ranges.len(), 1);
    assert!((ranges[0] - 46000.0).abs() < 1e-3);
}
