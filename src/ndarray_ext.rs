//! ndarray integration for decoded IDX files
//!
//! Enable with the `ndarray` feature flag.

use ndarray::{ArrayD, IxDyn};
use thiserror::Error;

use crate::idx::{Idx, IdxData};
use crate::types::DataType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdarrayError {
    /// Requested element type differs from the decoded one
    #[error("data type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: DataType, actual: DataType },
    /// Decoded length does not fill the shape (truncated payload)
    #[error("shape {shape:?} does not match data length {data_len}")]
    ShapeMismatch { shape: Vec<usize>, data_len: usize },
}

/// Element types an IDX payload can decode to.
pub trait IdxElement: Sized + Clone + 'static {
    const DATA_TYPE: DataType;

    fn slice(data: &IdxData) -> Option<&[Self]>;
}

macro_rules! idx_element {
    ($ty:ty, $variant:ident) => {
        impl IdxElement for $ty {
            const DATA_TYPE: DataType = DataType::$variant;

            fn slice(data: &IdxData) -> Option<&[Self]> {
                match data {
                    IdxData::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

idx_element!(u8, U8);
idx_element!(i8, I8);
idx_element!(u16, U16);
idx_element!(u32, U32);
idx_element!(f32, F32);
idx_element!(f64, F64);

/// Owned n-dimensional array for each element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum IdxArray {
    U8(ArrayD<u8>),
    I8(ArrayD<i8>),
    U16(ArrayD<u16>),
    U32(ArrayD<u32>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

fn shaped<T>(shape: &[usize], data: Vec<T>) -> Result<ArrayD<T>, NdarrayError> {
    let data_len = data.len();
    ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| NdarrayError::ShapeMismatch {
        shape: shape.to_vec(),
        data_len,
    })
}

impl Idx {
    /// Copy the buffer into an array of the given element type.
    pub fn to_ndarray<T: IdxElement>(&self) -> Result<ArrayD<T>, NdarrayError> {
        let values = T::slice(self.data()).ok_or(NdarrayError::TypeMismatch {
            expected: T::DATA_TYPE,
            actual: self.data_type(),
        })?;
        shaped(self.shape(), values.to_vec())
    }

    /// Move the buffer into an array without copying.
    pub fn into_ndarray(self) -> Result<IdxArray, NdarrayError> {
        let (data, shape) = self.into_parts();
        Ok(match data {
            IdxData::U8(v) => IdxArray::U8(shaped(&shape, v)?),
            IdxData::I8(v) => IdxArray::I8(shaped(&shape, v)?),
            IdxData::U16(v) => IdxArray::U16(shaped(&shape, v)?),
            IdxData::U32(v) => IdxArray::U32(shaped(&shape, v)?),
            IdxData::F32(v) => IdxArray::F32(shaped(&shape, v)?),
            IdxData::F64(v) => IdxArray::F64(shaped(&shape, v)?),
        })
    }
}
