use std::fmt;

/// Field input that cannot be turned into a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLoadError {
    /// A character that is neither the live nor the dead marker.
    UnexpectedChar { row: usize, col: usize, ch: char },
    /// Row with the wrong number of cells (rows are 0-based).
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for FieldLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar { row, col, ch } => {
                write!(f, "unexpected character {:?} at row {}, column {}", ch, row, col)
            }
            Self::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for FieldLoadError {}

/// Delay that is zero or larger than the allowed maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayRangeError {
    pub value: i64,
    pub max: u32,
}

impl fmt::Display for DelayRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delay {} ms is outside of 1..={}", self.value, self.max)
    }
}

impl std::error::Error for DelayRangeError {}

/// Anything that stops the program before the first generation is shown.
#[derive(Debug)]
pub enum StartupError {
    FieldLoad(FieldLoadError),
    DelayRange(DelayRangeError),
    Io(std::io::Error),
}

impl StartupError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FieldLoad(_) | Self::Io(_) => 1,
            Self::DelayRange(_) => 2,
        }
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldLoad(e) => write!(f, "field load error: {}", e),
            Self::DelayRange(e) => write!(f, "delay range error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FieldLoad(e) => Some(e),
            Self::DelayRange(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<FieldLoadError> for StartupError {
    fn from(e: FieldLoadError) -> Self {
        Self::FieldLoad(e)
    }
}

impl From<DelayRangeError> for StartupError {
    fn from(e: DelayRangeError) -> Self {
        Self::DelayRange(e)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
