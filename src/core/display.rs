use std::fmt;
use std::result;

use super::{Drill, DrillError, RangeConfig};

impl fmt::Display for Drill {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let name = match self {
            Self::Closures => "closures",
            Self::Spread => "spread",
            Self::Numbers => "numbers",
        };

        write!(f, "{}", name)
    }
}

impl fmt::Display for DrillError {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            Self::NoSuchThunk(index, len) => write!(
                f,
                "error: no thunk at index {} (only {} were made)",
                index, len
            ),
            Self::MissingArguments { expected, actual } => write!(
                f,
                "error: expected at least {} arguments but got {}",
                expected, actual
            ),
            Self::InvalidStep(step) => {
                write!(f, "error: step must be positive, got {}", step)
            }
            Self::OutOfBuffer(index) => {
                write!(f, "error: index {} is outside the backing buffer", index)
            }
        }
    }
}

impl fmt::Display for RangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}..={} by {}", self.start, self.end, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_errors_for_humans() {
        assert_eq!(
            "error: expected at least 3 arguments but got 1",
            DrillError::MissingArguments {
                expected: 3,
                actual: 1
            }
            .to_string()
        );
        assert_eq!(
            "error: step must be positive, got 0",
            DrillError::InvalidStep(0).to_string()
        );
        assert_eq!(
            "error: no thunk at index 5 (only 5 were made)",
            DrillError::NoSuchThunk(5, 5).to_string()
        );
        assert_eq!(
            "error: index 101 is outside the backing buffer",
            DrillError::OutOfBuffer(101).to_string()
        );
    }

    #[test]
    fn it_formats_range_configs() {
        assert_eq!("6..=30 by 4", RangeConfig::new(6, 30, 4).to_string());
    }
}
