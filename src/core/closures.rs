use std::cell::Cell;
use std::convert::TryFrom;
use std::rc::Rc;

use tracing::trace;

use super::{DrillError, Result};

/// A deferred computation. It captures its bindings when it is made and
/// produces a value each time it is called.
pub type Thunk = Box<dyn Fn() -> i64>;

/// Makes `count` thunks where thunk `k` returns `k`.
///
/// Each loop body binds a fresh `value` and moves it into its closure, so
/// every thunk owns its own snapshot of the counter.
#[must_use]
pub fn make_thunks(count: usize) -> Vec<Thunk> {
    let mut thunks: Vec<Thunk> = Vec::with_capacity(count);
    for i in (0_i64..).take(count) {
        let value = i;
        thunks.push(Box::new(move || value));
    }

    thunks
}

/// Makes `count` thunks that all read one shared counter.
///
/// The loop mutates the counter after every closure has been made, so every
/// thunk observes its final value (`count`) rather than the value it was
/// made with. Compare with `make_thunks`.
#[must_use]
pub fn make_shared_thunks(count: usize) -> Vec<Thunk> {
    let counter = Rc::new(Cell::new(0_i64));
    let mut thunks: Vec<Thunk> = Vec::with_capacity(count);
    for _ in 0..count {
        let shared = Rc::clone(&counter);
        thunks.push(Box::new(move || shared.get()));
        counter.set(counter.get() + 1);
    }

    thunks
}

/// Calls the thunk at `index`.
///
/// # Errors
/// Returns `DrillError::NoSuchThunk` if `index` is past the end of `thunks`.
pub fn invoke(thunks: &[Thunk], index: usize) -> Result<i64> {
    let thunk = thunks
        .get(index)
        .ok_or_else(|| DrillError::NoSuchThunk(index, thunks.len()))?;
    let value = thunk();
    trace!(index, value, "invoked thunk");

    Ok(value)
}

/// An outer `x` of 2 is shadowed by an inner `x` of 5, which sizes the thunk
/// list. The outer `x` then picks a thunk: `x * 2 == thunks[x * 2]()`.
///
/// # Errors
/// Returns `DrillError::NoSuchThunk` if the outer `x` picks past the list.
pub fn check() -> Result<bool> {
    let x: usize = 2;
    let thunks = {
        let x = 5;
        make_thunks(x)
    };

    picks_itself(&thunks, x * 2)
}

/// Same as `check`, but with shared capture. Every thunk sees the final
/// counter, so this is `false`.
///
/// # Errors
/// Returns `DrillError::NoSuchThunk` if the outer `x` picks past the list.
pub fn check_shared() -> Result<bool> {
    let x: usize = 2;
    let thunks = {
        let x = 5;
        make_shared_thunks(x)
    };

    picks_itself(&thunks, x * 2)
}

/// Whether the thunk at `index` returns `index`.
fn picks_itself(thunks: &[Thunk], index: usize) -> Result<bool> {
    let value = invoke(thunks, index)?;
    Ok(i64::try_from(index).map_or(false, |expected| expected == value))
}
