//! Fill-amount calculation for forwarding market buys through batches of
//! signed orders.
//!
//! The calculator is a pure library: it maps a primary order batch, a
//! fee-order batch and a fill request to the exact amount of input currency
//! the taker must supply, reproducing on-chain integer semantics bit for
//! bit. It performs no I/O and holds no state; identical inputs always
//! yield identical results.
//!
//! Submission of a computed fill happens behind the [`submit::Submitting`]
//! seam and is not observed by the calculator. A computed amount is an
//! estimate valid only at the block height it was derived from: any order
//! may be filled or cancelled by a third party between calculation and
//! submission, so callers must treat an on-chain revert as a normal
//! outcome and re-derive the fill from fresh orders.

pub mod batch;
pub mod fees;
pub mod fill;
pub mod submit;

pub use {
    batch::ValidatedBatch,
    fill::{
        Error, FeeTerms, FillRequest, FillResult, compute_exact_quantity_input,
        compute_market_buy_input,
    },
};
