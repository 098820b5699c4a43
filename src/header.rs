//! IDX header parsing.
//!
//! The header is a fixed 4 byte block followed by one big-endian `u32` per
//! dimension:
//!
//! ```text
//! [0x00][0x00][type tag][dim count N][dim 0 (4 bytes)] ... [dim N-1 (4 bytes)]
//! ```
//!
//! The type tag is carried through unchecked; [`IdxHeader::data_type`] rejects
//! unknown tags once the dimensions have been read.

use std::io::{self, Read};

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::error::{IdxError, Result};
use crate::types::DataType;

/// The two leading bytes every IDX file starts with.
pub const MAGIC: [u8; 2] = [0x00, 0x00];
/// Size of the magic/type/dimension-count block.
pub const PREFIX_SIZE: usize = 4;
/// Size of a single encoded dimension.
pub const DIM_SIZE: usize = 4;

/// Parsed IDX header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdxHeader {
    /// Raw type tag from byte 2.
    pub type_tag: u8,
    /// Dimension sizes in file order.
    pub dims: Vec<u32>,
}

impl IdxHeader {
    /// Element type for the stored tag.
    pub fn data_type(&self) -> Result<DataType> {
        DataType::from_tag(self.type_tag)
    }

    /// Shape as native sizes.
    pub fn shape(&self) -> Vec<usize> {
        self.dims.iter().map(|&d| d as usize).collect()
    }

    /// Product of all dimensions. A header with no dimensions describes a
    /// single element.
    pub fn element_count(&self) -> Result<usize> {
        self.dims.iter().try_fold(1usize, |acc, &d| {
            acc.checked_mul(d as usize).ok_or_else(|| {
                IdxError::HeaderInvalid(format!(
                    "dimension product of {:?} overflows usize",
                    self.dims
                ))
            })
        })
    }

    /// Encoded header length in bytes.
    pub fn encoded_len(&self) -> usize {
        PREFIX_SIZE + DIM_SIZE * self.dims.len()
    }

    /// Declared payload size in bytes.
    pub fn payload_len(&self) -> Result<usize> {
        let count = self.element_count()?;
        let width = self.data_type()?.width();
        count.checked_mul(width).ok_or_else(|| {
            IdxError::HeaderInvalid(format!(
                "payload of {count} elements of {width} bytes overflows usize"
            ))
        })
    }
}

/// Read an IDX header from the start of `reader`.
///
/// Consumes exactly `4 + 4 * N` bytes. The stream ending anywhere inside the
/// header is reported as [`IdxError::HeaderInvalid`].
pub fn parse_header<R: Read>(reader: &mut R) -> Result<IdxHeader> {
    let mut prefix = [0u8; PREFIX_SIZE];
    reader
        .read_exact(&mut prefix)
        .map_err(|e| short_read(e, "header prefix"))?;

    if prefix[..2] != MAGIC {
        return Err(IdxError::HeaderInvalid(format!(
            "magic bytes {:02X} {:02X} are not zero, not an IDX file",
            prefix[0], prefix[1]
        )));
    }

    let type_tag = prefix[2];
    let ndims = prefix[3] as usize;
    debug!("IDX header: type tag 0x{type_tag:02X}, {ndims} dimensions");

    let mut dims = Vec::with_capacity(ndims);
    for i in 0..ndims {
        let dim = reader
            .read_u32::<BigEndian>()
            .map_err(|e| short_read(e, &format!("dimension {i}")))?;
        trace!("dimension {i}: {dim}");
        dims.push(dim);
    }

    Ok(IdxHeader { type_tag, dims })
}

fn short_read(err: io::Error, what: &str) -> IdxError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        IdxError::HeaderInvalid(format!("stream ended while reading {what}"))
    } else {
        IdxError::Io(err)
    }
}
