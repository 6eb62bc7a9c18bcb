use tracing::trace;

use super::{DrillError, Result, POSITIONAL_PARAMS};

/// Binds `a`, `x` and `y` positionally and captures everything after them,
/// then returns `a` followed by the capture.
///
/// `x` and `y` are bound but unused; they only shift where the capture
/// starts.
///
/// # Errors
/// Returns `DrillError::MissingArguments` if `args` is shorter than the
/// positional parameter list.
pub fn forward(args: &[i64]) -> Result<Vec<i64>> {
    match args {
        [a, _x, _y, rest @ ..] => {
            trace!(a, rest = rest.len(), "forwarding");
            let mut out = Vec::with_capacity(rest.len() + 1);
            out.push(*a);
            out.extend_from_slice(rest);
            Ok(out)
        }
        _ => Err(DrillError::MissingArguments {
            expected: POSITIONAL_PARAMS,
            actual: args.len(),
        }),
    }
}

/// Copies `first` and appends `second` to the copy.
#[must_use]
pub fn spread(first: &[i64], second: &[i64]) -> Vec<i64> {
    let mut args = first.to_vec();
    args.extend_from_slice(second);
    args
}

/// Concatenates the decimal form of every value with no separator.
#[must_use]
pub fn join(values: &[i64]) -> String {
    values.iter().map(i64::to_string).collect()
}

/// Spreads `[2, 4]` and `[6, 8, 10, 12]` into `forward` and checks the
/// joined result is `"281012"`.
///
/// # Errors
/// Returns `DrillError::MissingArguments` if the spread list is too short
/// for `forward`.
pub fn check() -> Result<bool> {
    let first = [2, 4];
    let second = [6, 8, 10, 12];

    let forwarded = forward(&spread(&first, &second))?;
    Ok(join(&forwarded) == "281012")
}
