//! Integration tests for ndarray support

#![cfg(feature = "ndarray")]

use idx_reader::{decode, Config, DataType, IdxArray, NdarrayError, Silent};
use ndarray::{array, IxDyn};

fn images() -> Vec<u8> {
    let mut out = vec![0u8, 0, 0x08, 3, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 3];
    out.extend(0u8..12);
    out
}

#[test]
fn copies_into_typed_array() {
    let idx = decode(&images()[..], &Config::default(), Silent).unwrap();
    let arr = idx.to_ndarray::<u8>().unwrap();
    assert_eq!(arr.shape(), &[2, 2, 3]);
    assert_eq!(arr[IxDyn(&[1, 0, 2])], 8);
    assert_eq!(arr.index_axis(ndarray::Axis(0), 0), array![[0u8, 1, 2], [3, 4, 5]].into_dyn());
}

#[test]
fn wrong_element_type_is_reported() {
    let idx = decode(&images()[..], &Config::default(), Silent).unwrap();
    assert_eq!(
        idx.to_ndarray::<f32>().unwrap_err(),
        NdarrayError::TypeMismatch {
            expected: DataType::F32,
            actual: DataType::U8,
        }
    );
}

#[test]
fn moves_into_matching_variant() {
    let mut bytes = vec![0u8, 0, 0x0D, 2, 0, 0, 0, 1, 0, 0, 0, 2];
    bytes.extend_from_slice(&1.0f32.to_be_bytes());
    bytes.extend_from_slice(&2.0f32.to_be_bytes());
    let idx = decode(&bytes[..], &Config::default(), Silent).unwrap();
    match idx.into_ndarray().unwrap() {
        IdxArray::F32(arr) => assert_eq!(arr, array![[1.0f32, 2.0]].into_dyn()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn truncated_buffer_does_not_fit_shape() {
    let config = Config {
        allow_truncated: true,
        ..Config::default()
    };
    let data = images();
    let idx = decode(&data[..26], &config, Silent).unwrap();
    assert!(matches!(
        idx.into_ndarray(),
        Err(NdarrayError::ShapeMismatch { data_len: 10, .. })
    ));
}
