//!
//! Detects and decompresses the compressed record stream that follows the volume header in an
//! Archive II file.
//!
//! Two container encodings are observed in the wild: the original format wraps the message
//! stream in a series of concatenated bzip2 streams (one per roughly-elevation-sized chunk of
//! records), each framed by a 4-byte control word; a newer format gzips the entire
//! post-header byte range as a single stream. Both are auto-detected from the first bytes
//! following the volume header.
//!

use crate::result::{Error, Result};
use bzip2::read::{BzDecoder, MultiBzDecoder};
use flate2::read::GzDecoder;
use std::io::Read;

/// A bzip2 stream start position is only kept if it is more than this many bytes from the next
/// candidate start; this discards spurious `"BZh...AY&SY"` matches that occur inside compressed
/// payload data rather than at genuine stream boundaries.
const MIN_STREAM_GAP: usize = 1000;

const BZIP2_MAGIC: &[u8] = b"BZh";
const BZIP2_BLOCK_MAGIC: &[u8] = b"AY&SY";
pub(crate) const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Bzip2,
    Gzip,
}

/// Finds the start offset of every genuine bzip2 stream in `data`.
///
/// A candidate is any occurrence of the 3-byte `"BZh"` signature followed, after the compression
/// level digit, by the first block's `"AY&SY"` magic. Candidates closer than [`MIN_STREAM_GAP`]
/// bytes to the next candidate are dropped as spurious matches inside compressed payload data.
pub(crate) fn find_bzip2_stream_starts(data: &[u8]) -> Vec<usize> {
    let mut candidates = Vec::new();
    let mut search_from = 0;
    while let Some(offset) = find_subslice(&data[search_from..], BZIP2_MAGIC) {
        let pos = search_from + offset;
        if pos + 10 <= data.len() && &data[pos + 5..pos + 10] == BZIP2_BLOCK_MAGIC {
            candidates.push(pos);
        }
        search_from = pos + BZIP2_MAGIC.len();
    }

    candidates
        .iter()
        .enumerate()
        .filter(|(i, &pos)| {
            let next = candidates.get(i + 1).copied().unwrap_or(data.len());
            next - pos > MIN_STREAM_GAP
        })
        .map(|(_, &pos)| pos)
        .collect()
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// The byte range of bzip2 stream `index`, excluding the next record's 4-byte control word that
/// immediately precedes the following stream's start.
fn stream_range(data: &[u8], starts: &[usize], index: usize) -> (usize, usize) {
    let start = starts[index];
    let end = starts
        .get(index + 1)
        .map(|&next| next - 4)
        .unwrap_or(data.len());
    (start, end)
}

/// Fully decompresses every bzip2 stream in `data`, concatenating their output in order.
pub(crate) fn decompress_bzip2_full(data: &[u8], starts: &[usize]) -> Result<Vec<u8>> {
    let mut concatenated = Vec::new();
    for index in 0..starts.len() {
        let (start, end) = stream_range(data, starts, index);
        concatenated.extend_from_slice(&data[start..end]);
    }

    let mut out = Vec::new();
    MultiBzDecoder::new(concatenated.as_slice())
        .read_to_end(&mut out)
        .map_err(|source| Error::BzipStreamDecodeError {
            offset: starts.first().copied().unwrap_or(0),
            source,
        })?;
    Ok(out)
}

/// Decompresses the bzip2 streams at `indices`, each independently since every stream start is
/// itself a standalone, self-contained bzip2 stream. Returns one buffer per requested index, in
/// the same order, so callers can keep a one-to-one correspondence with their index list.
///
/// If `max_length` is set, each stream is decompressed only up to that many bytes; this supports
/// partial-read metadata mode, where only enough of each stream to recover its leading radials'
/// headers is needed. A stream that fails to decompress yields an empty buffer rather than
/// aborting the whole call, so sibling streams are unaffected.
pub(crate) fn decompress_bzip2_ranged(
    data: &[u8],
    starts: &[usize],
    indices: &[usize],
    max_length: Option<usize>,
) -> Vec<Vec<u8>> {
    indices
        .iter()
        .map(|&index| {
            let (start, end) = stream_range(data, starts, index);
            if start >= end || end > data.len() {
                return Vec::new();
            }
            let mut decoder = BzDecoder::new(&data[start..end]);

            let mut out = Vec::new();
            let result = match max_length {
                Some(limit) => {
                    let mut buf = vec![0u8; limit];
                    decoder.read(&mut buf).map(|read| out.extend_from_slice(&buf[..read]))
                }
                None => decoder.read_to_end(&mut out).map(|_| ()),
            };

            match result {
                Ok(()) => out,
                Err(e) => {
                    log::warn!("bzip2 stream {index} at offset {start} failed to decompress: {e}");
                    Vec::new()
                }
            }
        })
        .collect()
}

/// Fully decompresses a gzip-encoded record stream.
pub(crate) fn decompress_gzip_full(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(Error::GzipDecodeError)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzip2::write::BzEncoder;
    use bzip2::Compression as BzCompression;
    use flate2::write::GzEncoder;
    use flate2::Compression as GzCompression;
    use std::io::Write;

    fn bzip2_stream(payload: &[u8]) -> Vec<u8> {
        let mut encoder = BzEncoder::new(Vec::new(), BzCompression::best());
        encoder.write_all(payload).unwrap();
        encoder.finish().unwrap()
    }

    /// A deterministic, effectively-incompressible byte sequence: real bzip2 data from a block
    /// this size won't collapse below the stream-start gap threshold the way zeroed or
    /// repetitive test payloads would.
    fn incompressible_payload(len: usize) -> Vec<u8> {
        let mut state: u32 = 0x9e3779b9;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state & 0xff) as u8
            })
            .collect()
    }

    #[test]
    fn finds_single_stream_start_at_zero() {
        let stream = bzip2_stream(&incompressible_payload(4000));
        let starts = find_bzip2_stream_starts(&stream);
        assert_eq!(starts, vec![0]);
    }

    #[test]
    fn drops_spurious_candidate_close_to_next_start() {
        // Two real stream starts separated by only a handful of bytes: the gap filter should
        // discard the first as spurious, keeping only the one nearest the end.
        let mut data = b"BZh91AY&SY".to_vec();
        data.extend_from_slice(&[0u8; 20]);
        data.extend_from_slice(b"BZh91AY&SY");
        data.extend_from_slice(&[0u8; 2000]);

        let starts = find_bzip2_stream_starts(&data);
        assert_eq!(starts, vec![30]);
    }

    #[test]
    fn keeps_both_starts_when_gap_exceeds_threshold() {
        let mut data = b"BZh91AY&SY".to_vec();
        data.extend_from_slice(&[0u8; 2000]);
        let second_start = data.len();
        data.extend_from_slice(b"BZh91AY&SY");
        data.extend_from_slice(&[0u8; 2000]);

        let starts = find_bzip2_stream_starts(&data);
        assert_eq!(starts, vec![0, second_start]);
    }

    #[test]
    fn decompresses_full_bzip2_stream() {
        let payload = incompressible_payload(4000);
        let stream = bzip2_stream(&payload);

        let starts = find_bzip2_stream_starts(&stream);
        let decompressed = decompress_bzip2_full(&stream, &starts).unwrap();
        assert_eq!(decompressed, payload);
    }

    #[test]
    fn ranged_decompression_caps_output_length() {
        let payload = incompressible_payload(4000);
        let stream = bzip2_stream(&payload);

        let starts = find_bzip2_stream_starts(&stream);
        let results = decompress_bzip2_ranged(&stream, &starts, &[0], Some(10));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].len(), 10);
        assert_eq!(&results[0], &payload[..10]);
    }

    #[test]
    fn ranged_decompression_on_empty_range_yields_empty_buffer() {
        // starts[1] - 4 == starts[0], so stream 0's computed range is empty.
        let results = decompress_bzip2_ranged(&[0u8; 8], &[0, 4], &[0], None);
        assert_eq!(results, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn decompresses_gzip_stream() {
        let payload = b"hello nexrad";
        let mut encoder = GzEncoder::new(Vec::new(), GzCompression::default());
        encoder.write_all(payload).unwrap();
        let compressed = encoder.finish().unwrap();

        let decompressed = decompress_gzip_full(&compressed).unwrap();
        assert_eq!(decompressed, payload);
    }

    #[test]
    fn gzip_magic_constant_matches_real_header() {
        let mut encoder = GzEncoder::new(Vec::new(), GzCompression::default());
        encoder.write_all(b"x").unwrap();
        let compressed = encoder.finish().unwrap();
        assert_eq!(&compressed[..2], GZIP_MAGIC);
    }
}
