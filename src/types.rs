use std::fmt;

use crate::error::{IdxError, Result};

/// Element encoding selected by the third header byte.
///
/// The discriminants are the on-disk tag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    /// Unsigned byte.
    U8 = 0x08,
    /// Signed byte.
    I8 = 0x09,
    /// Big-endian unsigned 16-bit integer.
    U16 = 0x0B,
    /// Big-endian unsigned 32-bit integer.
    U32 = 0x0C,
    /// Big-endian IEEE-754 single precision float.
    F32 = 0x0D,
    /// Big-endian IEEE-754 double precision float.
    F64 = 0x0E,
}

impl DataType {
    /// Every supported element type in tag order.
    pub const ALL: [DataType; 6] = [
        DataType::U8,
        DataType::I8,
        DataType::U16,
        DataType::U32,
        DataType::F32,
        DataType::F64,
    ];

    /// Map a header tag to its element type.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0x08 => Ok(DataType::U8),
            0x09 => Ok(DataType::I8),
            0x0B => Ok(DataType::U16),
            0x0C => Ok(DataType::U32),
            0x0D => Ok(DataType::F32),
            0x0E => Ok(DataType::F64),
            other => Err(IdxError::UnknownType(other)),
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Size in bytes of a single encoded element.
    pub fn width(self) -> usize {
        match self {
            DataType::U8 | DataType::I8 => 1,
            DataType::U16 => 2,
            DataType::U32 | DataType::F32 => 4,
            DataType::F64 => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::U8 => "u8",
            DataType::I8 => "i8",
            DataType::U16 => "u16",
            DataType::U32 => "u32",
            DataType::F32 => "f32",
            DataType::F64 => "f64",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
