use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChecksumError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("range out of bounds: offset {offset} + length {length} exceeds {available} bytes")]
    RangeOutOfBounds {
        offset: usize,
        length: usize,
        available: usize,
    },
}
