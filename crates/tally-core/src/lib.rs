#![deny(warnings)]
#![deny(clippy::all)]

pub mod bits;
pub mod config;
pub mod engine;
pub mod error;

pub use config::{CrcConfig, Variant};
pub use engine::{Crc16, TextEncoding};
pub use error::ChecksumError;

pub type Result<T> = std::result::Result<T, ChecksumError>;
