//! The submission seam between the calculator and the chain.
//!
//! The calculator never observes submission outcomes. Orders may be filled
//! or cancelled by third parties between calculation and submission, so an
//! on-chain revert is a normal outcome for the caller to handle by
//! re-deriving the fill from fresh orders; revert reasons are opaque here
//! and not decoded.

use {
    crate::fill::{FeeTerms, FillResult},
    alloy::primitives::U256,
    anyhow::Result,
    model::Order,
};

/// The parameter bundle handed to the on-chain forwarder call.
#[derive(Clone, Debug)]
pub struct Submission {
    pub orders: Vec<Order>,
    pub fee_orders: Vec<Order>,
    /// The input amount to supply with the transaction, as computed by the
    /// fill calculator.
    pub input_amount: U256,
    pub fee_terms: FeeTerms,
}

impl Submission {
    /// Bundles a computed fill with the batches it was computed from.
    pub fn new(
        orders: Vec<Order>,
        fee_orders: Vec<Order>,
        result: &FillResult,
        fee_terms: FeeTerms,
    ) -> Self {
        Self {
            orders,
            fee_orders,
            input_amount: result.required_input,
            fee_terms,
        }
    }
}

/// How the chain answered a submitted fill.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
    /// The fill executed, with the realized balance changes.
    Accepted {
        input_spent: U256,
        maker_received: U256,
    },
    /// The transaction reverted on-chain.
    Reverted,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Submitting: Send + Sync {
    /// Submits the assembled fill transaction and reports the outcome once
    /// it is mined.
    async fn submit(&self, submission: Submission) -> Result<SubmissionOutcome>;
}
