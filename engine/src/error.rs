use thiserror::Error;

/// 解码流程中的全部错误类型。
///
/// 每一类错误对应一个独立的进程退出码，见 [`CubeError::exit_code`]。
#[derive(Debug, Error)]
pub enum CubeError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("unable to open input file")]
    OpenInput(#[source] std::io::Error),

    #[error("unable to determine size of input file")]
    InputSize(#[source] std::io::Error),

    #[error("unable to allocate {size} bytes for input file")]
    Alloc { size: u64 },

    #[error("unable to read input file")]
    ReadInput(#[source] std::io::Error),

    #[error("unable to read the whole input file: {actual} != {expected}")]
    ShortRead { expected: u64, actual: u64 },

    #[error("no .cubepro or .cube3 entry found in archive")]
    EntryNotFound,

    #[error("archive entry at offset {offset} ({size} bytes) extends past end of file")]
    TruncatedEntry { offset: usize, size: usize },

    #[error("encrypted payload is empty")]
    EmptyPayload,

    #[error("invalid cipher key length")]
    InvalidKey,

    #[error("invalid padding byte {pad}; make sure that this is a valid encoded file")]
    InvalidPadding { pad: u8 },

    #[error("unable to open output file")]
    OpenOutput(#[source] std::io::Error),

    #[error("unable to write the whole output file")]
    WriteOutput(#[source] std::io::Error),
}

impl CubeError {
    pub const EXIT_USAGE: i32 = 1;
    pub const EXIT_OPEN_INPUT: i32 = 2;
    pub const EXIT_INPUT_SIZE: i32 = 3;
    pub const EXIT_ALLOC: i32 = 4;
    pub const EXIT_SHORT_READ: i32 = 5;
    pub const EXIT_OPEN_OUTPUT: i32 = 6;
    pub const EXIT_WRITE_OUTPUT: i32 = 7;
    pub const EXIT_FORMAT: i32 = 8;
    pub const EXIT_PADDING: i32 = 9;
    pub const EXIT_KEY: i32 = 10;

    /// 错误类别对应的进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => Self::EXIT_USAGE,
            Self::OpenInput(_) => Self::EXIT_OPEN_INPUT,
            Self::InputSize(_) => Self::EXIT_INPUT_SIZE,
            Self::Alloc { .. } => Self::EXIT_ALLOC,
            Self::ReadInput(_) | Self::ShortRead { .. } => Self::EXIT_SHORT_READ,
            Self::EntryNotFound | Self::TruncatedEntry { .. } | Self::EmptyPayload => {
                Self::EXIT_FORMAT
            }
            Self::InvalidPadding { .. } => Self::EXIT_PADDING,
            Self::InvalidKey => Self::EXIT_KEY,
            Self::OpenOutput(_) => Self::EXIT_OPEN_OUTPUT,
            Self::WriteOutput(_) => Self::EXIT_WRITE_OUTPUT,
        }
    }
}

pub type CubeResult<T> = Result<T, CubeError>;
