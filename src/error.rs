use std::error::Error;
use std::fmt::{Display, Formatter};

/// Returned when a dynamically sized slice is converted into a fixed-size vector or matrix
/// and the number of elements does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthError {
    pub expected: usize,
    pub actual: usize,
}

impl LengthError {
    pub(crate) fn check(expected: usize, actual: usize) -> Result<(), LengthError> {
        if expected == actual {
            Ok(())
        } else {
            Err(LengthError { expected, actual })
        }
    }
}

impl Error for LengthError {}

impl Display for LengthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected {} elements, got {}",
            self.expected, self.actual
        )
    }
}
