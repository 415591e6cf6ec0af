//! Jewelry quote calculation.
//!
//! - `input`: raw form record and the validation gate that turns it into numbers.
//! - `config`: tax percentages and per-type charge defaults, loaded once at startup.
//! - `calc`: the single calculator implementation and its result records.

pub mod calc;
pub mod config;
pub mod input;

pub use calc::{compute_breakdown, compute_quote, round2, QuoteBreakdown, QuoteResult};
pub use config::{ChargeDefaults, DefaultPolicy, QuoteConfig, TaxConfig};
pub use input::{QuoteForm, QuoteInput};
