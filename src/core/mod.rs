use std::error;
use std::result;

pub mod closures;
mod display;
pub mod logger;
pub mod numbers;
pub mod spread;

pub type BufferedNumbers = numbers::BufferedNumbers;
pub type Numbers = numbers::Numbers;
pub type RangeConfig = numbers::RangeConfig;
pub type Result<T> = result::Result<T, DrillError>;
pub type Thunk = closures::Thunk;

/// Number of integers held by the backing buffer of `BufferedNumbers`
/// (i.e. `0..=100`).
pub const BUFFER_LEN: usize = 101;

/// Number of positional parameters `spread::forward` binds before its
/// variadic capture begins.
pub const POSITIONAL_PARAMS: usize = 3;

#[derive(Debug, PartialEq)]
pub enum DrillError {
    /// A thunk was requested at an index past the end of the list. The tuple
    /// is `(index, len)`.
    NoSuchThunk(usize, usize),
    /// `forward` was called with fewer arguments than it has positional
    /// parameters.
    MissingArguments { expected: usize, actual: usize },
    /// A range step that is zero or negative. The range would never reach
    /// its end.
    InvalidStep(i64),
    /// A buffered range asked for an index outside the backing buffer.
    OutOfBuffer(i64),
}

impl error::Error for DrillError {}

/// The drills the `rdrills` binary knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    Closures,
    Spread,
    Numbers,
}

impl Drill {
    /// Every drill, in the order `rdrills all` runs them.
    pub const ALL: [Drill; 3] = [Drill::Closures, Drill::Spread, Drill::Numbers];

    /// Runs the drill with its default inputs and returns the lines it would
    /// print.
    ///
    /// `Numbers` prints the default range and then `6..=30` by `4`.
    ///
    /// # Errors
    /// Returns whatever `DrillError` the drill itself returns.
    pub fn run(self) -> Result<Vec<String>> {
        tracing::debug!(drill = %self, "running drill");
        match self {
            Self::Closures => closures::check().map(|b| vec![b.to_string()]),
            Self::Spread => spread::check().map(|b| vec![b.to_string()]),
            Self::Numbers => {
                let by_fours = RangeConfig::default()
                    .with_start(6)
                    .with_step(4)
                    .with_end(30);

                let mut lines = Vec::new();
                for config in [RangeConfig::default(), by_fours].iter() {
                    lines.extend(config.iter()?.map(|n| n.to_string()));
                }
                Ok(lines)
            }
        }
    }
}
