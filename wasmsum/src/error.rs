use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BenchError {
    #[error("{name}: invalid result {actual} instead of expected result {expected}")]
    ChecksumMismatch {
        name: String,
        actual: u32,
        expected: u32,
    },

    #[error("module does not export `{0}`")]
    MissingExport(String),

    #[error("module imports unsupported `{module}.{name}`")]
    UnsupportedImport { module: String, name: String },

    #[error("non-numeric wasm value in `{0}`")]
    UnsupportedValue(String),

    #[error("byte offset {offset} is not aligned to {align} bytes")]
    MisalignedOffset { offset: usize, align: usize },

    #[error("{len} bytes at offset {offset} do not fit in {memory_len} bytes of linear memory")]
    BufferOutOfBounds {
        offset: usize,
        len: usize,
        memory_len: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}: no samples recorded")]
    NoSamples(String),
}
