//! Decoder for IDX binary array files, the format the MNIST datasets ship in.
//!
//! ```no_run
//! let idx = idx_reader::read("train-images-idx3-ubyte")?;
//! println!("{:?}", idx.shape());
//! # Ok::<(), idx_reader::IdxError>(())
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod header;
pub mod idx;
pub mod io_utils;
pub mod progress;
pub mod types;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

pub use config::Config;
pub use decode::{decode, decode_file, read};
pub use error::{IdxError, Result};
pub use header::{parse_header, IdxHeader, MAGIC};
pub use idx::{Idx, IdxData};
pub use progress::{batch_size, ConsoleProgress, Progress, ProgressState, ProgressStatus, Silent};
pub use types::DataType;

#[cfg(feature = "ndarray")]
pub use ndarray_ext::{IdxArray, IdxElement, NdarrayError};
