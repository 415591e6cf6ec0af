//! goldcalc core: the quote calculator, its input/config/result types, and the
//! error surface shared by the server and tooling.
//!
//! This crate intentionally carries no transport or runtime dependencies. The
//! calculator is a pure function over an explicit [`quote::QuoteConfig`], so it
//! can be called from any number of concurrent requests without locking.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Every malformed input surfaces as `GoldCalcError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod quote;

/// Shared result type.
pub use error::{GoldCalcError, Result};
