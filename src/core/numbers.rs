use std::convert::TryFrom;
use std::iter::FusedIterator;

use tracing::debug;

use super::{DrillError, Result, BUFFER_LEN};

/// Describes an inclusive range walked by a fixed step.
///
/// Every field has a default (`0..=100` by `1`) and can be overridden on its
/// own through `with_start`, `with_end` and `with_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            start: 0,
            end: 100,
            step: 1,
        }
    }
}

macro_rules! overridable {
    ($($field:ident),*) => {
        paste::item! {
            impl RangeConfig {
                $(
                    #[must_use]
                    pub fn [<with_ $field>](mut self, $field: i64) -> Self {
                        self.$field = $field;
                        self
                    }
                )*
            }
        }
    };
}

overridable!(start, end, step);

impl RangeConfig {
    #[must_use]
    pub fn new(start: i64, end: i64, step: i64) -> Self {
        RangeConfig { start, end, step }
    }

    /// Returns a fresh lazy sequence over this range. Calling it again
    /// restarts from `start`.
    ///
    /// # Errors
    /// Returns `DrillError::InvalidStep` if `step` is zero or negative.
    pub fn iter(&self) -> Result<Numbers> {
        if self.step <= 0 {
            return Err(DrillError::InvalidStep(self.step));
        }

        debug!(range = %self, "starting sequence");
        Ok(Numbers {
            next: Some(self.start),
            end: self.end,
            step: self.step,
        })
    }

    /// The last value the range yields, if it yields any.
    fn last_value(&self) -> Option<i64> {
        if self.start > self.end {
            return None;
        }

        let span = i128::from(self.end) - i128::from(self.start);
        let step = i128::from(self.step);
        // the result lies in start..=end so it always fits
        i64::try_from(i128::from(self.start) + span / step * step).ok()
    }
}

/// Shorthand for `config.iter()`.
///
/// # Errors
/// Returns `DrillError::InvalidStep` if `step` is zero or negative.
pub fn numbers(config: RangeConfig) -> Result<Numbers> {
    config.iter()
}

/// The on-demand sequence. Values are computed as they are asked for; there
/// is no backing storage.
///
/// Stepping past `i64::MAX` ends the sequence instead of wrapping.
#[derive(Debug, Clone)]
pub struct Numbers {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl Numbers {
    fn remaining(&self) -> Option<usize> {
        match self.next {
            Some(n) if n <= self.end => {
                let span = i128::from(self.end) - i128::from(n);
                usize::try_from(span / i128::from(self.step) + 1).ok()
            }
            _ => Some(0),
        }
    }
}

impl Iterator for Numbers {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let end = self.end;
        let current = self.next.filter(|n| *n <= end)?;
        self.next = current.checked_add(self.step);

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Numbers {}

/// The buffer-backed sequence: the range walks indices into a precomputed
/// buffer of `0..=100` and yields what it finds there.
#[derive(Debug, Clone)]
pub struct BufferedNumbers {
    values: Vec<i64>,
    indices: Numbers,
}

impl BufferedNumbers {
    /// # Errors
    /// Returns `DrillError::InvalidStep` for a zero or negative step, and
    /// `DrillError::OutOfBuffer` if the range would read outside the buffer.
    pub fn new(config: RangeConfig) -> Result<Self> {
        let indices = config.iter()?;
        if let Some(last) = config.last_value() {
            let in_buffer =
                |idx: i64| usize::try_from(idx).map_or(false, |i| i < BUFFER_LEN);
            if !in_buffer(config.start) {
                return Err(DrillError::OutOfBuffer(config.start));
            }
            if !in_buffer(last) {
                return Err(DrillError::OutOfBuffer(last));
            }
        }

        let values = (0_i64..).take(BUFFER_LEN).collect();
        Ok(BufferedNumbers { values, indices })
    }

    /// Returns a fresh sequence over the buffer.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        // indices were bounds checked in `new`
        self.indices
            .clone()
            .filter_map(|idx| usize::try_from(idx).ok())
            .filter_map(move |idx| self.values.get(idx).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(config: RangeConfig) -> Vec<i64> {
        config.iter().unwrap().collect()
    }

    #[test]
    fn it_defaults_to_zero_through_one_hundred() {
        let actual = collect(RangeConfig::default());

        assert_eq!(101, actual.len());
        assert_eq!((0..=100).collect::<Vec<i64>>(), actual);
    }

    #[test]
    fn it_walks_a_range_by_a_step() {
        let config = RangeConfig::default()
            .with_start(6)
            .with_step(4)
            .with_end(30);

        assert_eq!(vec![6, 10, 14, 18, 22, 26, 30], collect(config));
    }

    #[test]
    fn it_overrides_each_field_independently() {
        let config = RangeConfig::default().with_end(3);

        assert_eq!(RangeConfig::new(0, 3, 1), config);
        assert_eq!(vec![0, 1, 2, 3], collect(config));
    }

    #[test]
    fn it_stops_before_overshooting_the_end() {
        assert_eq!(vec![0, 3, 6, 9], collect(RangeConfig::new(0, 10, 3)));
    }

    #[test]
    fn it_can_be_restarted() {
        let config = RangeConfig::new(6, 30, 4);

        assert_eq!(collect(config), collect(config));
        assert_eq!(numbers(config).unwrap().count(), 7);
        assert_eq!(numbers(config).unwrap().count(), 7);
    }

    #[test]
    fn it_yields_nothing_if_start_is_past_end() {
        let mut numbers = RangeConfig::new(10, 5, 1).iter().unwrap();

        assert_eq!(None, numbers.next());
        assert_eq!(None, numbers.next());
    }

    #[test]
    fn it_yields_a_single_value_if_start_is_end() {
        assert_eq!(vec![7], collect(RangeConfig::new(7, 7, 3)));
    }

    #[test]
    fn it_handles_negative_bounds() {
        assert_eq!(vec![-4, -2, 0], collect(RangeConfig::new(-4, 1, 2)));
    }

    #[test]
    fn it_returns_an_error_for_a_non_positive_step() {
        assert_eq!(
            Err(DrillError::InvalidStep(0)),
            RangeConfig::default().with_step(0).iter().map(|_| ())
        );
        assert_eq!(
            Err(DrillError::InvalidStep(-1)),
            RangeConfig::default().with_step(-1).iter().map(|_| ())
        );
    }

    #[test]
    fn it_stops_instead_of_overflowing() {
        let config = RangeConfig::new(i64::MAX - 1, i64::MAX, 5);

        assert_eq!(vec![i64::MAX - 1], collect(config));
    }

    #[test]
    fn it_reports_an_exact_size_hint() {
        let mut numbers = RangeConfig::new(6, 30, 4).iter().unwrap();
        assert_eq!((7, Some(7)), numbers.size_hint());

        numbers.next();
        assert_eq!((6, Some(6)), numbers.size_hint());

        let empty = RangeConfig::new(1, 0, 1).iter().unwrap();
        assert_eq!((0, Some(0)), empty.size_hint());
    }

    #[test]
    fn it_reads_through_the_buffer() {
        let buffered = BufferedNumbers::new(RangeConfig::new(6, 30, 4)).unwrap();

        assert_eq!(vec![6, 10, 14, 18, 22, 26, 30], buffered.iter().collect::<Vec<_>>());
        // restartable
        assert_eq!(7, buffered.iter().count());
    }

    #[test]
    fn it_agrees_with_the_on_demand_sequence() {
        let configs = [
            RangeConfig::default(),
            RangeConfig::new(6, 30, 4),
            RangeConfig::new(0, 100, 7),
            RangeConfig::new(50, 10, 1),
            RangeConfig::new(0, 120, 100),
        ];

        for config in configs.iter() {
            let buffered = BufferedNumbers::new(*config).unwrap();
            assert_eq!(collect(*config), buffered.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn it_returns_an_error_if_the_range_leaves_the_buffer() {
        assert_eq!(
            Err(DrillError::OutOfBuffer(101)),
            BufferedNumbers::new(RangeConfig::new(0, 101, 1)).map(|_| ())
        );
        assert_eq!(
            Err(DrillError::OutOfBuffer(-1)),
            BufferedNumbers::new(RangeConfig::new(-1, 5, 1)).map(|_| ())
        );
        assert_eq!(
            Err(DrillError::InvalidStep(0)),
            BufferedNumbers::new(RangeConfig::new(0, 5, 0)).map(|_| ())
        );
    }

    #[test]
    fn it_buffers_zero_through_one_hundred() {
        let buffered = BufferedNumbers::new(RangeConfig::default()).unwrap();

        assert_eq!(
            (0..=100).collect::<Vec<i64>>(),
            buffered.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn it_allows_an_empty_range_anywhere() {
        let buffered = BufferedNumbers::new(RangeConfig::new(500, 400, 1)).unwrap();

        assert_eq!(0, buffered.iter().count());
    }
}
