//! Payload decoding.
//!
//! One sequential pass over the stream: header, then one element-width chunk
//! at a time until the declared element count is reached or the stream ends.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, ByteOrder};
use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{IdxError, Result};
use crate::header::parse_header;
use crate::idx::{Idx, IdxData};
use crate::progress::{batch_size, Progress, Silent};
use crate::types::DataType;

/// Upper bound on the buffer reserved up front. Larger payloads grow as they
/// are read, so a corrupt header cannot force a huge allocation.
const MAX_PREALLOC_BYTES: usize = 16 << 20;

/// Decode an IDX stream.
///
/// `progress` is started with the declared element count and advanced as
/// elements are stored. When the stream ends early the result depends on
/// [`Config::allow_truncated`].
pub fn decode<R: Read, P: Progress>(mut reader: R, config: &Config, mut progress: P) -> Result<Idx> {
    let header = parse_header(&mut reader)?;
    let data_type = header.data_type()?;
    let total = header.element_count()?;
    debug!("decoding {total} {data_type} elements with shape {:?}", header.dims);

    progress.start(total as u64, &config.label);

    let data = match data_type {
        DataType::U8 => IdxData::U8(read_payload(
            &mut reader,
            total,
            batch_size(total),
            &mut progress,
            |b: [u8; 1]| b[0],
        )?),
        DataType::I8 => IdxData::I8(read_payload(
            &mut reader,
            total,
            1,
            &mut progress,
            |b: [u8; 1]| b[0] as i8,
        )?),
        DataType::U16 => IdxData::U16(read_payload(
            &mut reader,
            total,
            1,
            &mut progress,
            |b: [u8; 2]| BigEndian::read_u16(&b),
        )?),
        DataType::U32 => IdxData::U32(read_payload(
            &mut reader,
            total,
            1,
            &mut progress,
            |b: [u8; 4]| BigEndian::read_u32(&b),
        )?),
        DataType::F32 => IdxData::F32(read_payload(
            &mut reader,
            total,
            1,
            &mut progress,
            |b: [u8; 4]| BigEndian::read_f32(&b),
        )?),
        DataType::F64 => IdxData::F64(read_payload(
            &mut reader,
            total,
            1,
            &mut progress,
            |b: [u8; 8]| BigEndian::read_f64(&b),
        )?),
    };

    let decoded = data.len();
    if decoded < total {
        if !config.allow_truncated {
            return Err(IdxError::Truncated {
                expected: total,
                decoded,
            });
        }
        warn!("payload truncated: decoded {decoded} of {total} elements");
    } else {
        info!("decoded {decoded} {data_type} elements");
    }

    Ok(Idx::new(data, header.shape()))
}

/// Open `path` and decode it. The file is closed on every return path.
pub fn decode_file<P: Progress>(path: impl AsRef<Path>, config: &Config, progress: P) -> Result<Idx> {
    let path = path.as_ref();
    debug!("opening {}", path.display());
    let file = File::open(path)?;
    decode(BufReader::new(file), config, progress)
}

/// Decode `path` with the default configuration and no progress output.
pub fn read(path: impl AsRef<Path>) -> Result<Idx> {
    decode_file(path, &Config::default(), Silent)
}

/// Read up to `total` elements of `W` bytes each.
///
/// Stops early on end of stream; a partial trailing element is dropped.
/// Progress is reported every `batch` elements with any remainder flushed at
/// the end.
fn read_payload<T, R, P, F, const W: usize>(
    reader: &mut R,
    total: usize,
    batch: usize,
    progress: &mut P,
    convert: F,
) -> Result<Vec<T>>
where
    R: Read,
    P: Progress,
    F: Fn([u8; W]) -> T,
{
    let mut values = Vec::with_capacity(total.min(MAX_PREALLOC_BYTES / W));
    let mut chunk = [0u8; W];
    let mut pending = 0usize;

    while values.len() < total {
        let filled = fill(reader, &mut chunk)?;
        if filled == 0 {
            break;
        }
        if filled < W {
            debug!("dropping partial element of {filled}/{W} bytes at end of stream");
            break;
        }
        values.push(convert(chunk));
        pending += 1;
        if pending == batch {
            progress.advance(batch as u64);
            pending = 0;
        }
    }
    if pending > 0 {
        progress.advance(pending as u64);
    }

    Ok(values)
}

/// Fill `buf` from `reader`, returning how many bytes were read before end of
/// stream.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
