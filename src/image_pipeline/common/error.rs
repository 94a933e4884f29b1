use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode BMP image: {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Dimensions must be even for 4:2:0 chroma: width={0}, height={1}")]
    OddDimensions(usize, usize),

    #[error(
        "Image {}x{} does not fit in {}x{} video frame",
        .image.0, .image.1, .frame.0, .frame.1
    )]
    ImageTooLarge {
        image: (usize, usize),
        frame: (usize, usize),
    },

    #[error("Buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Invalid row range {start}..{end} for image height {height}")]
    InvalidRowRange {
        start: usize,
        end: usize,
        height: usize,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Worker pool error: {0}")]
    ThreadPool(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
