//! Top-level facade crate for goldcalc.
//!
//! Re-exports the quote calculator and the server library so users can depend on a single crate.

pub mod core {
    pub use goldcalc_core::*;
}

pub mod server {
    pub use goldcalc_server::*;
}
