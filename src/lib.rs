//! `librdrills` is the library behind the `rdrills` binary.
//!
//! Each module under `core` is a small, self-contained drill on one language
//! feature:
//! - `closures`: deferred computations that each own a per-iteration binding
//!   (and a shared-capture counter-example to compare against)
//! - `spread`: forwarding a combined argument list through a fixed positional
//!   prefix and a variadic tail
//! - `numbers`: a lazy, restartable integer range, both on demand and read
//!   through a precomputed buffer
//!
//! Drills report failures through `core::DrillError` (a plain enum, no
//! panics) and log through `tracing`; `core::logger` sets up the subscriber.
#![warn(clippy::pedantic)]

pub mod core;
