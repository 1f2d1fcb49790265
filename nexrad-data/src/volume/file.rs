use crate::result::{Error, Result};
use crate::volume::container::{self, Container};
use crate::volume::partial;
use crate::volume::record;
use crate::volume::scan::{self, RadialInfo, RadialMessageType, Scan};
use crate::volume::Header;
use chrono::{DateTime, Utc};
use nexrad_decode::messages::volume_coverage_pattern;
use nexrad_decode::messages::{Message, MessageContents};
use std::path::Path;

/// Per-scan geometry summary returned by [`VolumeFile::scan_info`].
#[derive(Debug, Clone)]
pub struct ScanInfo {
    pub moments: Vec<String>,
    pub ngates: Vec<u32>,
    pub gate_spacing: Vec<f32>,
    pub first_gate: Vec<f32>,
}

/// Controls how much of a volume's compressed stream [`VolumeFile::new_with_mode`] decompresses
/// and decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Fully decompress and decode every message. [`VolumeFile::new`] and [`VolumeFile::open`]
    /// always use this mode.
    #[default]
    All,
    /// Decode the same messages as `All`, but additionally record each scan's byte range in the
    /// source stream, retrievable via [`VolumeFile::scan_byte_range`].
    AllMeta,
    /// Decode only enough of the stream to recover scan-level metadata (volume coverage pattern,
    /// scan count, target angles), skipping full decompression of the bzip2 streams that aren't
    /// sampled. Rays within a scan beyond the sampled one won't be present, so [`VolumeFile::get_data`]
    /// and similar per-ray queries will be sparse. Falls back to a full [`ReadMode::AllMeta`]
    /// decode if the sampled streams don't look like a clean one-record-per-scan layout.
    MinMeta,
}

/// A decoded NEXRAD Archive II volume: its header, every message in collection order, and the
/// radial records grouped into scans.
///
/// Constructed once from the volume's compressed bytes; read-only thereafter except for the
/// decompression work done eagerly at construction.
pub struct VolumeFile {
    header: Header,
    container: Container,
    messages: Vec<Message<'static>>,
    radial_message_type: RadialMessageType,
    /// Indices into `messages` of the radials that make up `scans`, in parse order.
    radial_records: Vec<usize>,
    scans: Vec<Scan>,
    vcp: Option<volume_coverage_pattern::Message<'static>>,
    /// One entry per scan, present only when constructed with [`ReadMode::AllMeta`] or
    /// [`ReadMode::MinMeta`]: the byte offset where that scan's records begin, and where the
    /// next scan's begin (`None` for the last scan).
    scan_byte_ranges: Option<Vec<(usize, Option<usize>)>>,
}

impl VolumeFile {
    /// Reads and decodes a volume file from disk.
    ///
    /// A `.gz` extension isn't required to trigger gzip handling; the container is always
    /// detected from the bytes themselves, matching [`VolumeFile::new`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(std::fs::read(path)?)
    }

    /// Reads and decodes a volume file from disk with a non-default [`ReadMode`].
    pub fn open_with_mode(path: impl AsRef<Path>, mode: ReadMode) -> Result<Self> {
        Self::new_with_mode(std::fs::read(path)?, mode)
    }

    /// Decodes a volume file from its raw bytes.
    ///
    /// If `data` starts with the gzip magic bytes, it is treated as a `.gz`-wrapped Archive II
    /// file and is fully gunzipped first; the resulting bytes are then parsed as a normal
    /// (uncompressed-header, bzip2-or-gzip-body) archive.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        Self::new_with_mode(data, ReadMode::All)
    }

    /// Decodes a volume file from its raw bytes with a non-default [`ReadMode`].
    ///
    /// See [`ReadMode`] for what each mode does and [`VolumeFile::new`] for the gzip-wrapping
    /// and header-parsing behavior common to every mode.
    pub fn new_with_mode(data: Vec<u8>, mode: ReadMode) -> Result<Self> {
        let data = if data.starts_with(&container::GZIP_MAGIC) {
            container::decompress_gzip_full(&data)?
        } else {
            data
        };

        if data.len() < Header::SIZE + COMPRESSION_RECORD_SIZE {
            return Err(Error::UnexpectedEof);
        }

        let header = Header::parse(&data)?.clone();
        let body = &data[Header::SIZE..];
        let compression_record = &body[..COMPRESSION_RECORD_SIZE];
        let rest = &body[COMPRESSION_RECORD_SIZE..];
        let is_bzip2 = &compression_record[4..6] == b"BZ";

        let (container, messages, positions) = if is_bzip2 {
            let starts = container::find_bzip2_stream_starts(rest);
            match mode {
                ReadMode::All => {
                    let decompressed = container::decompress_bzip2_full(rest, &starts)?;
                    let messages = record::decode_all(Container::Bzip2, &decompressed)?;
                    (Container::Bzip2, messages, None)
                }
                ReadMode::AllMeta => {
                    let (messages, positions) =
                        partial::full_bzip2_decode_with_positions(rest, &starts)?;
                    (Container::Bzip2, messages, Some(positions))
                }
                ReadMode::MinMeta => match partial::sparse_bzip2_decode(rest, &starts)? {
                    Some((messages, positions)) => (Container::Bzip2, messages, Some(positions)),
                    None => {
                        log::warn!(
                            "minimal-metadata bzip2 sample looked inconsistent; falling back to a full decode"
                        );
                        let (messages, positions) =
                            partial::full_bzip2_decode_with_positions(rest, &starts)?;
                        (Container::Bzip2, messages, Some(positions))
                    }
                },
            }
        } else {
            let decompressed = container::decompress_gzip_full(rest)?;
            match mode {
                ReadMode::All => {
                    let messages = record::decode_all(Container::Gzip, &decompressed)?;
                    (Container::Gzip, messages, None)
                }
                ReadMode::AllMeta => {
                    let (messages, positions) = partial::decode_gzip_with_positions(&decompressed)?;
                    (Container::Gzip, messages, Some(positions))
                }
                ReadMode::MinMeta => {
                    let (messages, positions) = partial::decode_gzip_with_positions(&decompressed)?;
                    let radial_type = scan::choose_radial_message_type(&messages);
                    let (messages, positions) = match radial_type {
                        Some(radial_type) => {
                            partial::subsample_gzip_radials(messages, positions, radial_type)
                        }
                        None => (messages, positions),
                    };
                    (Container::Gzip, messages, Some(positions))
                }
            }
        };

        let radial_message_type =
            scan::choose_radial_message_type(&messages).ok_or(Error::NoRadialsFound)?;

        let radial_records: Vec<usize> = messages
            .iter()
            .enumerate()
            .filter(|(_, m)| matches_radial_type(m, radial_message_type))
            .map(|(i, _)| i)
            .collect();
        if radial_records.is_empty() {
            return Err(Error::NoRadialsFound);
        }

        let infos: Vec<RadialInfo> = radial_records
            .iter()
            .filter_map(|&i| scan::radial_info(&messages[i]))
            .collect();
        let scans = scan::group_scans(&infos);

        let scan_byte_ranges =
            positions.map(|positions| compute_scan_byte_ranges(&scans, &radial_records, &positions));

        let vcp = messages.iter().find_map(|m| match m.contents() {
            MessageContents::VolumeCoveragePattern(vcp) => Some(vcp.clone()),
            _ => None,
        });
        if vcp.is_none() {
            log::warn!("volume has no VCP message");
        }

        Ok(Self {
            header,
            container,
            messages,
            radial_message_type,
            radial_records,
            scans,
            vcp,
            scan_byte_ranges,
        })
    }

    /// The byte range `[start, end)` of scan `index` within its source stream: the offset into
    /// the post-header compressed body for bzip2 volumes, or into the fully-decompressed buffer
    /// for gzip volumes (which offer no random access into a single compressed stream). `end` is
    /// `None` for the last scan, meaning "through the end of the stream".
    ///
    /// Only available when this volume was constructed with [`ReadMode::AllMeta`] or
    /// [`ReadMode::MinMeta`]; returns `None` otherwise.
    pub fn scan_byte_range(&self, index: usize) -> Option<(usize, Option<usize>)> {
        self.scan_byte_ranges.as_ref()?.get(index).copied()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn container(&self) -> &'static str {
        match self.container {
            Container::Bzip2 => "bzip2",
            Container::Gzip => "gzip",
        }
    }

    /// `1` for legacy (Message Type 1) volumes, `31` for generic-format (Message Type 31) volumes.
    pub fn msg_type(&self) -> u8 {
        match self.radial_message_type {
            RadialMessageType::Legacy => 1,
            RadialMessageType::Generic => 31,
        }
    }

    pub fn scan_count(&self) -> usize {
        self.scans.len()
    }

    pub fn vcp(&self) -> Option<&volume_coverage_pattern::Message<'static>> {
        self.vcp.as_ref()
    }

    pub fn get_vcp_pattern(&self) -> Option<u16> {
        self.vcp.as_ref().map(|v| v.pattern_number())
    }

    fn resolve_scans<'a>(&'a self, scans: Option<&[usize]>) -> Vec<&'a Scan> {
        match scans {
            Some(indices) => indices.iter().filter_map(|&i| self.scans.get(i)).collect(),
            None => self.scans.iter().collect(),
        }
    }

    fn radial(&self, scan: &Scan, ray: usize) -> Option<&Message<'static>> {
        let local = *scan.indices().get(ray)?;
        let message_index = *self.radial_records.get(local)?;
        self.messages.get(message_index)
    }

    fn first_radial(&self, scan: &Scan) -> Option<&Message<'static>> {
        self.radial(scan, 0)
    }

    /// Radar location as (latitude, longitude, height above sea level in meters including the
    /// feedhorn). Zero when the volume doesn't carry a `VOL` block (legacy/Message Type 1 files).
    pub fn location(&self) -> (f32, f32, f32) {
        for &message_index in &self.radial_records {
            if let MessageContents::DigitalRadarData(m) = self.messages[message_index].contents() {
                if let Some(vol) = m.volume_data() {
                    let height =
                        vol.site_height.get() as f32 + vol.feedhorn_height.get() as f32;
                    return (vol.latitude.get(), vol.longitude.get(), height);
                }
            }
        }
        (0.0, 0.0, 0.0)
    }

    /// Per-scan geometry summary, taken from the first ray of each requested scan.
    pub fn scan_info(&self, scans: Option<&[usize]>) -> Vec<ScanInfo> {
        self.resolve_scans(scans)
            .into_iter()
            .map(|scan| {
                let Some(first) = self.first_radial(scan) else {
                    return ScanInfo { moments: vec![], ngates: vec![], gate_spacing: vec![], first_gate: vec![] };
                };
                match first.contents() {
                    MessageContents::DigitalRadarData(m) => {
                        let names = ["REF", "VEL", "SW", "ZDR", "PHI", "RHO", "CFP"];
                        let mut moments = Vec::new();
                        let mut ngates = Vec::new();
                        let mut gate_spacing = Vec::new();
                        let mut first_gate = Vec::new();
                        for name in names {
                            if let Some(block) = m.moment(name) {
                                moments.push(name.to_string());
                                ngates.push(block.header().number_of_data_moment_gates.get() as u32);
                                gate_spacing.push(block.header().data_moment_range_sample_interval.get() as f32);
                                first_gate.push(block.header().data_moment_range.get() as f32);
                            }
                        }
                        ScanInfo { moments, ngates, gate_spacing, first_gate }
                    }
                    MessageContents::DigitalRadarDataLegacy(m) => {
                        let mut moments = Vec::new();
                        let mut ngates = Vec::new();
                        let mut gate_spacing = Vec::new();
                        let mut first_gate = Vec::new();
                        if m.reflectivity_gates().is_some() {
                            moments.push("REF".to_string());
                            ngates.push(m.num_surveillance_gates() as u32);
                            gate_spacing.push(m.surveillance_gate_interval() as f32);
                            first_gate.push(m.surveillance_first_gate_range() as f32);
                        }
                        if m.velocity_gates().is_some() {
                            moments.push("VEL".to_string());
                            ngates.push(m.num_doppler_gates() as u32);
                            gate_spacing.push(m.doppler_gate_interval() as f32);
                            first_gate.push(m.doppler_first_gate_range() as f32);
                        }
                        if m.spectrum_width_gates().is_some() {
                            moments.push("SW".to_string());
                            ngates.push(m.num_doppler_gates() as u32);
                            gate_spacing.push(m.doppler_gate_interval() as f32);
                            first_gate.push(m.doppler_first_gate_range() as f32);
                        }
                        ScanInfo { moments, ngates, gate_spacing, first_gate }
                    }
                    _ => ScanInfo { moments: vec![], ngates: vec![], gate_spacing: vec![], first_gate: vec![] },
                }
            })
            .collect()
    }

    /// Collection start time of the first requested scan's first ray, and each ray's offset in
    /// seconds from that start, scan by scan.
    pub fn get_times(&self, scans: Option<&[usize]>) -> (Option<DateTime<Utc>>, Vec<Vec<f64>>) {
        let resolved = self.resolve_scans(scans);
        let start = resolved
            .first()
            .and_then(|scan| self.first_radial(scan))
            .and_then(radial_date_time);

        let start_secs = start.map(|dt| dt.timestamp() as f64 + dt.timestamp_subsec_millis() as f64 / 1000.0);

        let offsets = resolved
            .iter()
            .map(|scan| {
                (0..scan.indices().len())
                    .map(|ray| {
                        self.radial(scan, ray)
                            .and_then(radial_date_time)
                            .zip(start_secs)
                            .map(|(dt, start)| {
                                let secs = dt.timestamp() as f64 + dt.timestamp_subsec_millis() as f64 / 1000.0;
                                secs - start
                            })
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        (start, offsets)
    }

    /// Per-ray azimuth angles in degrees, scan by scan.
    pub fn get_azimuth_angles(&self, scans: Option<&[usize]>) -> Vec<Vec<f32>> {
        self.per_ray(scans, |m| match m.contents() {
            MessageContents::DigitalRadarData(m) => m.azimuth_angle(),
            MessageContents::DigitalRadarDataLegacy(m) => m.azimuth_angle(),
            _ => 0.0,
        })
    }

    /// Per-ray elevation angles in degrees, scan by scan.
    pub fn get_elevation_angles(&self, scans: Option<&[usize]>) -> Vec<Vec<f32>> {
        self.per_ray(scans, |m| match m.contents() {
            MessageContents::DigitalRadarData(m) => m.elevation_angle(),
            MessageContents::DigitalRadarDataLegacy(m) => m.elevation_angle(),
            _ => 0.0,
        })
    }

    fn per_ray(&self, scans: Option<&[usize]>, f: impl Fn(&Message<'static>) -> f32) -> Vec<Vec<f32>> {
        self.resolve_scans(scans)
            .into_iter()
            .map(|scan| {
                (0..scan.indices().len())
                    .map(|ray| self.radial(scan, ray).map(&f).unwrap_or(0.0))
                    .collect()
            })
            .collect()
    }

    /// Per-scan target (commanded) elevation angle in degrees.
    ///
    /// For generic-format volumes this comes from the volume coverage pattern's cut parameters;
    /// it falls back to `0.0` when no VCP was observed or the scan has no corresponding cut.
    /// For legacy volumes it is the first ray's reported elevation angle, rounded to one decimal.
    pub fn get_target_angles(&self, scans: Option<&[usize]>) -> Vec<f64> {
        let target_angles = self.vcp.as_ref().map(|v| v.target_angles());

        self.resolve_scans(scans)
            .into_iter()
            .enumerate()
            .map(|(requested_index, scan)| match self.radial_message_type {
                RadialMessageType::Generic => target_angles
                    .as_ref()
                    .and_then(|angles| angles.get(requested_index))
                    .copied()
                    .unwrap_or(0.0),
                RadialMessageType::Legacy => self
                    .first_radial(scan)
                    .and_then(|m| match m.contents() {
                        MessageContents::DigitalRadarDataLegacy(m) => Some(m.elevation_angle()),
                        _ => None,
                    })
                    .map(|angle| (angle as f64 * 10.0).round() / 10.0)
                    .unwrap_or(0.0),
            })
            .collect()
    }

    /// Nyquist velocity in m/s for the first ray of each requested scan.
    ///
    /// Legacy (Message Type 1) headers don't carry a Nyquist velocity field; this returns `0.0`
    /// for those volumes.
    pub fn get_nyquist_vel(&self, scans: Option<&[usize]>) -> Vec<f32> {
        self.resolve_scans(scans)
            .into_iter()
            .map(|scan| {
                self.first_radial(scan)
                    .and_then(|m| match m.contents() {
                        MessageContents::DigitalRadarData(m) => m.radial_data(),
                        _ => None,
                    })
                    .map(|rad| rad.nyquist_velocity.get() as f32 * 0.01)
                    .unwrap_or(0.0)
            })
            .collect()
    }

    /// Unambiguous range in meters for the first ray of each requested scan.
    pub fn get_unambig_range(&self, scans: Option<&[usize]>) -> Vec<f32> {
        self.resolve_scans(scans)
            .into_iter()
            .map(|scan| {
                self.first_radial(scan)
                    .map(|m| match m.contents() {
                        MessageContents::DigitalRadarData(m) => m
                            .radial_data()
                            .map(|rad| rad.unambiguous_range.get() as f32 * 100.0)
                            .unwrap_or(0.0),
                        MessageContents::DigitalRadarDataLegacy(m) => {
                            m.unambiguous_range_km() * 1000.0
                        }
                        _ => 0.0,
                    })
                    .unwrap_or(0.0)
            })
            .collect()
    }

    /// Gate data for `moment` across every ray of the requested scans, as `[nrays][max_ngates]`
    /// raw unsigned words (`u16`, widened from 8-bit gates). Rays missing the moment are filled
    /// with `1` (the range-folded sentinel). When `raw` is `false`, values are converted to
    /// physical units via `(x - offset) / scale`, with `0`/`1` sentinels masked to `None`.
    pub fn get_data(
        &self,
        moment: &str,
        max_ngates: usize,
        scans: Option<&[usize]>,
        raw: bool,
    ) -> Vec<Vec<Option<f32>>> {
        let mut rows = Vec::new();
        for scan in self.resolve_scans(scans) {
            for ray in 0..scan.indices().len() {
                let Some(message) = self.radial(scan, ray) else {
                    rows.push(vec![Some(1.0); max_ngates]);
                    continue;
                };
                rows.push(moment_row(message, moment, max_ngates, raw));
            }
        }
        rows
    }
}

fn moment_row(message: &Message<'static>, moment: &str, max_ngates: usize, raw: bool) -> Vec<Option<f32>> {
    let mut row = vec![if raw { Some(1.0) } else { None }; max_ngates];

    match message.contents() {
        MessageContents::DigitalRadarData(m) => {
            if let Some(block) = m.moment(moment) {
                if raw {
                    for (slot, value) in row.iter_mut().zip(block.raw_words()) {
                        *slot = Some(value as f32);
                    }
                } else {
                    use nexrad_decode::messages::digital_radar_data::ScaledMomentValue;
                    for (slot, value) in row.iter_mut().zip(block.decoded_values()) {
                        *slot = match value {
                            ScaledMomentValue::Value(v) => Some(v),
                            ScaledMomentValue::BelowThreshold | ScaledMomentValue::RangeFolded => None,
                        };
                    }
                }
            }
        }
        MessageContents::DigitalRadarDataLegacy(m) => {
            let (gates, scale, offset) = match moment {
                "REF" => (m.reflectivity_gates(), 2.0, 66.0),
                "VEL" => (
                    m.velocity_gates(),
                    if m.doppler_velocity_resolution() == 1.0 { 1.0 } else { 2.0 },
                    129.0,
                ),
                "SW" => (m.spectrum_width_gates(), 2.0, 129.0),
                _ => (None, 1.0, 0.0),
            };
            if let Some(gates) = gates {
                for (slot, &value) in row.iter_mut().zip(gates.iter()) {
                    *slot = if raw {
                        Some(value as f32)
                    } else if value > 1 {
                        Some((value as f32 - offset) / scale)
                    } else {
                        None
                    };
                }
            }
        }
        _ => {}
    }

    row
}

/// Derives each scan's `[start, end)` byte range from per-message positions: a scan starts where
/// its first radial's message does, and ends where the next scan's first radial begins.
fn compute_scan_byte_ranges(
    scans: &[Scan],
    radial_records: &[usize],
    positions: &[usize],
) -> Vec<(usize, Option<usize>)> {
    let position_of = |local: usize| -> usize {
        radial_records
            .get(local)
            .and_then(|&message_index| positions.get(message_index))
            .copied()
            .unwrap_or(0)
    };

    scans
        .iter()
        .enumerate()
        .map(|(i, scan)| {
            let start = scan.indices().first().map(|&local| position_of(local)).unwrap_or(0);
            let end = scans
                .get(i + 1)
                .and_then(|next| next.indices().first())
                .map(|&local| position_of(local));
            (start, end)
        })
        .collect()
}

pub(crate) fn matches_radial_type(message: &Message<'static>, kind: RadialMessageType) -> bool {
    matches!(
        (message.contents(), kind),
        (MessageContents::DigitalRadarDataLegacy(_), RadialMessageType::Legacy)
            | (MessageContents::DigitalRadarData(_), RadialMessageType::Generic)
    )
}

fn radial_date_time(message: &Message<'static>) -> Option<DateTime<Utc>> {
    match message.contents() {
        MessageContents::DigitalRadarData(m) => m.date_time(),
        MessageContents::DigitalRadarDataLegacy(m) => m.date_time(),
        _ => None,
    }
}

const COMPRESSION_RECORD_SIZE: usize = 12;
