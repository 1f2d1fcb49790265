use log::{info, LevelFilter};
use nexrad_data::volume::VolumeFile;
use std::env;

/// Opens an Archive II volume file and prints a summary of its scans.
///
/// Usage: `cargo run --example scan_info -- <path-to-archive-file>`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_level(LevelFilter::Info)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: scan_info <path-to-archive-file>")?;

    info!("Opening volume file: {path}");
    let volume = VolumeFile::open(&path)?;

    let header = volume.header();
    info!(
        "Site {} recorded at {:?}, container={}, message type={}",
        header.icao_of_radar().unwrap_or_default(),
        header.date_time(),
        volume.container(),
        volume.msg_type(),
    );

    if let Some(pattern) = volume.get_vcp_pattern() {
        info!("Volume coverage pattern: {pattern}");
    }

    info!("{} scans", volume.scan_count());
    for (index, info) in volume.scan_info(None).iter().enumerate() {
        let target_angle = volume.get_target_angles(Some(&[index])).first().copied();
        info!(
            "scan {index}: target_angle={target_angle:?} moments={:?} ngates={:?}",
            info.moments, info.ngates
        );
    }

    Ok(())
}
