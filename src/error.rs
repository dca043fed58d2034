use derive_more::Display;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by fallible constructors and mutations.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    #[display("invalid partition: {_0}")]
    InvalidPartition(String),

    #[display("index {index} out of range for partition of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[display("fill of length {fill_len} does not match diagram size {size}")]
    SizeMismatch { fill_len: usize, size: usize },

    #[display("invalid skew pair: {_0}")]
    Skew(SkewError),
}

/// Ways the inner partition of a skew pair can fail to fit in the outer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum SkewError {
    #[display("inner sum {inner} exceeds outer sum {outer}")]
    Size { inner: usize, outer: usize },

    #[display("inner length {inner} exceeds outer length {outer}")]
    Length { inner: usize, outer: usize },

    #[display("row {row}: inner part {inner} exceeds outer part {outer}")]
    RowContainment { row: usize, inner: usize, outer: usize },
}

impl std::error::Error for Error {}

impl From<SkewError> for Error {
    fn from(e: SkewError) -> Self {
        Error::Skew(e)
    }
}
