//!
//! Metadata-only (`all-meta`/`min-meta`) decode paths: recovers scan-level byte ranges without
//! fully decompressing every message, and, for bzip2-contained volumes, predicts which streams
//! are worth sampling from the volume coverage pattern's cut geometry.
//!

use crate::result::Result;
use crate::volume::container::{self, Container};
use crate::volume::file::matches_radial_type;
use crate::volume::record;
use crate::volume::scan::{self, RadialMessageType};
use nexrad_decode::messages::{message_frame_len, volume_coverage_pattern, Message, MessageContents};

/// Bzip2 streams a non-super-resolution elevation cut is expected to span.
const STREAMS_PER_CUT: usize = 3;
/// Bzip2 streams a super-resolution elevation cut (0.5-degree azimuthal sampling) is expected to
/// span, roughly double the non-super-resolution case.
const STREAMS_PER_SUPER_RES_CUT: usize = 6;
/// Sampling stride used when no volume coverage pattern was found in stream 0 (TDWR volumes
/// don't carry one).
const FALLBACK_STRIDE: usize = 3;
const FALLBACK_START: usize = 2;
/// Every 30th radial record is kept when subsampling a gzip volume's already-decompressed
/// message stream for `min-meta`.
const GZIP_SAMPLE_STRIDE: usize = 30;

/// Predicts which bzip2 stream indices are worth sampling for metadata, given the volume
/// coverage pattern decoded from stream 0 (if any).
///
/// Each cut is assumed to span [`STREAMS_PER_CUT`] streams, or [`STREAMS_PER_SUPER_RES_CUT`] if
/// it's a super-resolution cut; the predicted boundary after each cut becomes a sample point.
/// Always includes the first and last stream. Falls back to every third stream starting at
/// index 2 when `vcp` is `None`.
fn predict_sample_indices(
    vcp: Option<&volume_coverage_pattern::Message<'static>>,
    stream_count: usize,
) -> Vec<usize> {
    if stream_count == 0 {
        return Vec::new();
    }

    let mut indices = vec![0];

    match vcp {
        Some(vcp) => {
            let mut expected = 0usize;
            for cut in 0..vcp.elevations().len() {
                expected += if vcp.is_super_resolution(cut).unwrap_or(false) {
                    STREAMS_PER_SUPER_RES_CUT
                } else {
                    STREAMS_PER_CUT
                };
                if expected < stream_count {
                    indices.push(expected);
                }
            }
        }
        None => indices.extend((FALLBACK_START..stream_count).step_by(FALLBACK_STRIDE)),
    }

    let last = stream_count - 1;
    if indices.last().copied() != Some(last) {
        indices.push(last);
    }
    indices.sort_unstable();
    indices.dedup();
    indices
}

fn is_radial_record(message: &Message<'static>) -> bool {
    matches!(
        message.contents(),
        MessageContents::DigitalRadarData(_) | MessageContents::DigitalRadarDataLegacy(_)
    )
}

/// Whether a radial record's leading moment reports a nonzero gate count. A sampled record
/// with zero gates usually means the prediction landed mid-block rather than on a clean
/// record boundary.
fn has_nonzero_gates(message: &Message<'static>) -> bool {
    match message.contents() {
        MessageContents::DigitalRadarData(m) => [
            "REF", "VEL", "SW", "ZDR", "PHI", "RHO", "CFP",
        ]
        .iter()
        .any(|name| {
            m.moment(name)
                .map(|b| b.header().number_of_data_moment_gates.get() > 0)
                .unwrap_or(false)
        }),
        MessageContents::DigitalRadarDataLegacy(m) => {
            m.num_surveillance_gates() > 0 || m.num_doppler_gates() > 0
        }
        _ => true,
    }
}

/// A sparse sample is only trustworthy if it carries radials of exactly one message type and
/// every sampled record has data to offer.
fn valid_sparse_sample(messages: &[Message<'static>]) -> bool {
    let radial_type = scan::choose_radial_message_type(messages);
    let Some(radial_type) = radial_type else {
        return false;
    };
    messages
        .iter()
        .filter(|m| is_radial_record(m))
        .all(|m| matches_radial_type(m, radial_type) && has_nonzero_gates(m))
}

/// Attempts a sparse, metadata-only decode of a bzip2-contained volume: fully decodes stream 0
/// to recover the volume coverage pattern (or confirm there isn't one), predicts which further
/// streams are worth sampling, and decodes only those. Returns `Ok(None)` if the sample doesn't
/// look like a clean one-record-per-scan layout, so the caller can fall back to a full decode.
///
/// On success, returns the sampled messages (one radial per sampled stream, plus the volume
/// coverage pattern message if one was found) alongside each message's originating stream's
/// start offset within `rest`.
pub(crate) fn sparse_bzip2_decode(
    rest: &[u8],
    starts: &[usize],
) -> Result<Option<(Vec<Message<'static>>, Vec<usize>)>> {
    if starts.is_empty() {
        return Ok(None);
    }

    let first_buf = container::decompress_bzip2_ranged(rest, starts, &[0], None)
        .into_iter()
        .next()
        .unwrap_or_default();
    let first_messages = record::decode_all(Container::Bzip2, &first_buf)?;

    let vcp_message = first_messages
        .iter()
        .find(|m| matches!(m.contents(), MessageContents::VolumeCoveragePattern(_)))
        .cloned();
    let vcp = vcp_message.as_ref().and_then(|m| match m.contents() {
        MessageContents::VolumeCoveragePattern(v) => Some(v),
        _ => None,
    });

    let sample_indices = predict_sample_indices(vcp, starts.len());

    let mut messages = Vec::new();
    let mut source_streams = Vec::new();

    for &index in &sample_indices {
        let decoded = if index == 0 {
            first_messages.clone()
        } else {
            let buf = container::decompress_bzip2_ranged(rest, starts, &[index], None)
                .into_iter()
                .next()
                .unwrap_or_default();
            record::decode_all(Container::Bzip2, &buf)?
        };

        if let Some(message) = decoded.into_iter().find(is_radial_record) {
            source_streams.push(starts[index]);
            messages.push(message);
        }
    }

    if !valid_sparse_sample(&messages) {
        return Ok(None);
    }

    if let Some(vcp_message) = vcp_message {
        source_streams.push(starts[0]);
        messages.push(vcp_message);
    }

    Ok(Some((messages, source_streams)))
}

/// Fully decodes every bzip2 stream, independently per stream (so stream boundaries aren't
/// lost), returning each message alongside its originating stream's start offset within `rest`.
/// Used for `all-meta`, which needs the same messages `all` decodes plus per-scan byte ranges.
pub(crate) fn full_bzip2_decode_with_positions(
    rest: &[u8],
    starts: &[usize],
) -> Result<(Vec<Message<'static>>, Vec<usize>)> {
    let indices: Vec<usize> = (0..starts.len()).collect();
    let buffers = container::decompress_bzip2_ranged(rest, starts, &indices, None);

    let mut messages = Vec::new();
    let mut positions = Vec::new();
    for (&stream_index, buf) in indices.iter().zip(buffers.iter()) {
        let decoded = record::decode_all(Container::Bzip2, buf)?;
        positions.extend(std::iter::repeat(starts[stream_index]).take(decoded.len()));
        messages.extend(decoded);
    }
    Ok((messages, positions))
}

/// Decodes a fully-decompressed gzip buffer, returning each message alongside its byte offset
/// within that buffer.
///
/// Gzip offers no random access into a single compressed stream, so unlike the bzip2 case this
/// can't skip any decompression work; `min-meta` for gzip volumes (see
/// [`subsample_gzip_radials`]) only trims which records are kept afterward.
pub(crate) fn decode_gzip_with_positions(
    decompressed: &[u8],
) -> Result<(Vec<Message<'static>>, Vec<usize>)> {
    let messages = record::decode_all(Container::Gzip, decompressed)?;
    let mut positions = Vec::with_capacity(messages.len());
    let mut pos = 0usize;
    for message in &messages {
        positions.push(pos);
        pos += message_frame_len(message.header());
    }
    Ok((messages, positions))
}

/// Keeps every non-radial message plus every [`GZIP_SAMPLE_STRIDE`]th radial, in original order.
pub(crate) fn subsample_gzip_radials(
    messages: Vec<Message<'static>>,
    positions: Vec<usize>,
    radial_type: RadialMessageType,
) -> (Vec<Message<'static>>, Vec<usize>) {
    let mut kept_messages = Vec::new();
    let mut kept_positions = Vec::new();
    let mut radial_seen = 0usize;

    for (message, position) in messages.into_iter().zip(positions) {
        if matches_radial_type(&message, radial_type) {
            if radial_seen % GZIP_SAMPLE_STRIDE == 0 {
                kept_messages.push(message);
                kept_positions.push(position);
            }
            radial_seen += 1;
        } else {
            kept_messages.push(message);
            kept_positions.push(position);
        }
    }

    (kept_messages, kept_positions)
}
