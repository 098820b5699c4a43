use crate::types::DataType;

/// Decoded payload. Exactly one element kind is active, chosen by the type
/// tag of the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum IdxData {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl IdxData {
    /// Element kind of the active variant.
    pub fn data_type(&self) -> DataType {
        match self {
            IdxData::U8(_) => DataType::U8,
            IdxData::I8(_) => DataType::I8,
            IdxData::U16(_) => DataType::U16,
            IdxData::U32(_) => DataType::U32,
            IdxData::F32(_) => DataType::F32,
            IdxData::F64(_) => DataType::F64,
        }
    }

    /// Number of decoded elements.
    pub fn len(&self) -> usize {
        match self {
            IdxData::U8(v) => v.len(),
            IdxData::I8(v) => v.len(),
            IdxData::U16(v) => v.len(),
            IdxData::U32(v) => v.len(),
            IdxData::F32(v) => v.len(),
            IdxData::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A decoded IDX file: the flat row-major buffer plus its declared shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Idx {
    data: IdxData,
    shape: Vec<usize>,
}

impl Idx {
    pub(crate) fn new(data: IdxData, shape: Vec<usize>) -> Self {
        Self { data, shape }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &IdxData {
        &self.data
    }

    pub fn data_type(&self) -> DataType {
        self.data.data_type()
    }

    /// Number of elements actually decoded.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the shape declares.
    pub fn element_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// True when the payload ended before the declared element count. Only
    /// possible when decoding with `Config::allow_truncated`.
    pub fn is_truncated(&self) -> bool {
        self.len() < self.element_count()
    }

    /// Split into the element buffer and the shape vector.
    pub fn into_parts(self) -> (IdxData, Vec<usize>) {
        (self.data, self.shape)
    }

    /// Borrow the buffer as `u8` elements, or `None` for any other kind.
    pub fn as_u8(&self) -> Option<&[u8]> {
        match &self.data {
            IdxData::U8(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<&[i8]> {
        match &self.data {
            IdxData::I8(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match &self.data {
            IdxData::U16(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<&[u32]> {
        match &self.data {
            IdxData::U32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.data {
            IdxData::F32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match &self.data {
            IdxData::F64(v) => Some(v),
            _ => None,
        }
    }
}
