//! Fill-amount calculation over validated order batches.
//!
//! Both operations walk the primary batch in caller-supplied sequence
//! order, route fee-currency acquisition through the fee-order batch and
//! add the proportional protocol fee skim on top of the total input
//! consumed. All divisions truncate toward zero except the documented
//! ceiling inverses (see [`crate::fees`]).

use {
    crate::{batch::ValidatedBatch, fees},
    alloy::primitives::{Address, U256},
    model::{AssetClass, Order},
    number::u256_ext::U256Ext,
};

pub use error::{Error, Math};

/// Denominator of fee proportions expressed in basis points.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Ceiling on the fee proportion accepted by the exact-quantity path, in
/// basis points (5%).
pub const MAX_FEE_PROPORTION_BPS: u16 = 500;

/// Protocol fee terms: a proportional skim routed to a recipient on top of
/// every computed fill. Separate from any order's taker fee.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeTerms {
    /// Skim proportion in basis points, scaled 1/10000.
    pub proportion_bps: u16,
    /// The account receiving the skim at submission.
    pub recipient: Address,
}

/// What the taker asks the calculator for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FillRequest {
    /// Spend up to `budget` input currency on the order batch.
    MarketBuy { budget: U256 },
    /// Acquire exactly `quantity` units of the batch's maker asset.
    ExactQuantity { quantity: U256 },
}

impl FillRequest {
    pub fn compute(
        &self,
        orders: &[Order],
        fee_orders: &[Order],
        fee_terms: FeeTerms,
    ) -> Result<FillResult, Error> {
        match *self {
            Self::MarketBuy { budget } => {
                compute_market_buy_input(orders, fee_orders, fee_terms, budget)
            }
            Self::ExactQuantity { quantity } => {
                compute_exact_quantity_input(orders, fee_orders, fee_terms, quantity)
            }
        }
    }
}

/// The computed input requirement for one fill attempt.
///
/// Produced fresh per call with no persistent identity. The skim is
/// additive, never deducted, so `required_input` decomposes exactly into
/// `spent_on_orders + spent_on_fee_orders + protocol_fee`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FillResult {
    /// Input currency routed to the primary orders.
    pub spent_on_orders: U256,
    /// Input currency diverted through the fee-order batch to acquire the
    /// fee currency owed by the primary fills.
    pub spent_on_fee_orders: U256,
    /// The protocol fee skim on the total input consumed.
    pub protocol_fee: U256,
    /// Total input the taker must supply.
    pub required_input: U256,
    /// Maker asset acquired by the fill.
    pub maker_received: U256,
    /// Budget left unspent once the batch was exhausted. Always zero in
    /// exact-quantity mode.
    pub leftover_budget: U256,
}

/// Computes the input required to market-buy through `orders` with a fixed
/// input budget.
///
/// The budget caps the input routed to primary orders; fee-currency
/// acquisition cost and the protocol skim come on top and are reported in
/// [`FillResult::required_input`]. The final order is prorated with
/// truncating division. This path does not enforce the fee-proportion
/// ceiling: the proportion is forwarded as given, and an excessive value
/// surfaces as an on-chain revert at submission.
#[tracing::instrument(skip_all, fields(
    orders = orders.len(),
    fee_orders = fee_orders.len(),
    %budget,
))]
pub fn compute_market_buy_input(
    orders: &[Order],
    fee_orders: &[Order],
    fee_terms: FeeTerms,
    budget: U256,
) -> Result<FillResult, Error> {
    let batch = ValidatedBatch::new(orders)?;
    let fee_batch = ValidatedBatch::new(fee_orders)?;

    let mut spent = U256::ZERO;
    let mut received = U256::ZERO;
    let mut fee_currency_owed = U256::ZERO;
    let mut remaining = budget;
    for order in batch.orders() {
        if remaining.is_zero() {
            break;
        }
        let input = remaining.min(order.taker_asset_amount);
        let filled = fill_with_input(order, input)?;
        spent = spent.checked_add(input).ok_or(Math::Overflow)?;
        received = received
            .checked_add(filled.maker_amount)
            .ok_or(Math::Overflow)?;
        fee_currency_owed = fee_currency_owed
            .checked_add(filled.fee_amount)
            .ok_or(Math::Overflow)?;
        remaining -= input;
        tracing::trace!(%input, maker = %filled.maker_amount, fee = %filled.fee_amount, "filled order");
    }

    finalize(
        spent,
        received,
        fee_currency_owed,
        remaining,
        fee_batch,
        fee_terms,
    )
}

/// Computes the input required to acquire exactly `quantity` units of the
/// batch's maker asset.
///
/// Unlike the market-buy path this pre-validates the fee proportion against
/// [`MAX_FEE_PROPORTION_BPS`], failing client-side instead of spending gas
/// on a certain revert. For a unique-asset batch each order contributes
/// exactly one unit and `quantity` must equal the batch length; partial
/// fills of unique assets do not exist.
#[tracing::instrument(skip_all, fields(
    orders = orders.len(),
    fee_orders = fee_orders.len(),
    %quantity,
))]
pub fn compute_exact_quantity_input(
    orders: &[Order],
    fee_orders: &[Order],
    fee_terms: FeeTerms,
    quantity: U256,
) -> Result<FillResult, Error> {
    if quantity.is_zero() {
        return Err(Error::ZeroQuantity);
    }
    if fee_terms.proportion_bps > MAX_FEE_PROPORTION_BPS {
        return Err(Error::FeeProportionTooHigh(fee_terms.proportion_bps));
    }
    let batch = ValidatedBatch::new(orders)?;
    let fee_batch = ValidatedBatch::new(fee_orders)?;

    let (spent, fee_currency_owed) = match batch.class() {
        AssetClass::Unique => exact_unique(batch, quantity)?,
        AssetClass::Fungible => exact_fungible(batch, quantity)?,
    };

    finalize(
        spent,
        quantity,
        fee_currency_owed,
        U256::ZERO,
        fee_batch,
        fee_terms,
    )
}

/// Every order in a unique-asset batch is a single unit filled whole.
fn exact_unique(batch: ValidatedBatch<'_>, quantity: U256) -> Result<(U256, U256), Error> {
    if quantity != U256::from(batch.len()) {
        return Err(Error::QuantityMismatch {
            orders: batch.len(),
            requested: quantity,
        });
    }
    let mut spent = U256::ZERO;
    let mut fee_currency_owed = U256::ZERO;
    for order in batch.orders() {
        spent = spent
            .checked_add(order.taker_asset_amount)
            .ok_or(Math::Overflow)?;
        fee_currency_owed = fee_currency_owed
            .checked_add(order.taker_fee)
            .ok_or(Math::Overflow)?;
    }
    Ok((spent, fee_currency_owed))
}

fn exact_fungible(batch: ValidatedBatch<'_>, quantity: U256) -> Result<(U256, U256), Error> {
    let mut spent = U256::ZERO;
    let mut fee_currency_owed = U256::ZERO;
    let mut remaining = quantity;
    for order in batch.orders() {
        if remaining.is_zero() {
            break;
        }
        let (input, fee) = if remaining >= order.maker_asset_amount {
            remaining -= order.maker_asset_amount;
            (order.taker_asset_amount, order.taker_fee)
        } else {
            // Inverse of the on-chain floor: round the required input up so
            // the delivered maker amount cannot fall short of the target.
            let input = mul_div_ceil(
                remaining,
                order.taker_asset_amount,
                order.maker_asset_amount,
            )?;
            let fee = mul_div(input, order.taker_fee, order.taker_asset_amount)?;
            remaining = U256::ZERO;
            (input, fee)
        };
        spent = spent.checked_add(input).ok_or(Math::Overflow)?;
        fee_currency_owed = fee_currency_owed.checked_add(fee).ok_or(Math::Overflow)?;
        tracing::trace!(%input, %fee, "filled order");
    }
    if !remaining.is_zero() {
        return Err(Error::InsufficientFillableAmount {
            requested: quantity,
            available: quantity - remaining,
        });
    }
    Ok((spent, fee_currency_owed))
}

struct PartialFill {
    maker_amount: U256,
    fee_amount: U256,
}

/// The maker amount and prorated fee obtained by supplying `input` taker
/// asset to `order`. Full fills take the order's literal amounts; partial
/// fills prorate with truncating division, matching the on-chain floor.
fn fill_with_input(order: &Order, input: U256) -> Result<PartialFill, Math> {
    if input == order.taker_asset_amount {
        return Ok(PartialFill {
            maker_amount: order.maker_asset_amount,
            fee_amount: order.taker_fee,
        });
    }
    Ok(PartialFill {
        maker_amount: mul_div(input, order.maker_asset_amount, order.taker_asset_amount)?,
        fee_amount: mul_div(input, order.taker_fee, order.taker_asset_amount)?,
    })
}

fn finalize(
    spent_on_orders: U256,
    maker_received: U256,
    fee_currency_owed: U256,
    leftover_budget: U256,
    fee_batch: ValidatedBatch<'_>,
    fee_terms: FeeTerms,
) -> Result<FillResult, Error> {
    let acquisition = fees::acquire_fee_currency(fee_batch, fee_currency_owed)?;
    let total_consumed = spent_on_orders
        .checked_add(acquisition.input)
        .ok_or(Math::Overflow)?;
    let protocol_fee = fees::protocol_fee_skim(total_consumed, fee_terms.proportion_bps)?;
    let required_input = total_consumed
        .checked_add(protocol_fee)
        .ok_or(Math::Overflow)?;
    tracing::debug!(
        %spent_on_orders,
        spent_on_fee_orders = %acquisition.input,
        %protocol_fee,
        %required_input,
        "computed fill"
    );
    Ok(FillResult {
        spent_on_orders,
        spent_on_fee_orders: acquisition.input,
        protocol_fee,
        required_input,
        maker_received,
        leftover_budget,
    })
}

pub(crate) fn mul_div(value: U256, num: U256, denom: U256) -> Result<U256, Math> {
    if denom.is_zero() {
        return Err(Math::DivisionByZero);
    }
    value.checked_mul_div(&num, &denom).ok_or(Math::Overflow)
}

pub(crate) fn mul_div_ceil(value: U256, num: U256, denom: U256) -> Result<U256, Math> {
    if denom.is_zero() {
        return Err(Math::DivisionByZero);
    }
    value
        .checked_mul_div_ceil(&num, &denom)
        .ok_or(Math::Overflow)
}

pub mod error {
    use {super::MAX_FEE_PROPORTION_BPS, alloy::primitives::U256};

    #[derive(Debug, Eq, PartialEq, thiserror::Error)]
    pub enum Error {
        #[error("fee orders supply {available} of {required} fee currency")]
        InsufficientFeeOrders { required: U256, available: U256 },
        #[error("fee proportion {0} bps exceeds the {max} bps ceiling", max = MAX_FEE_PROPORTION_BPS)]
        FeeProportionTooHigh(u16),
        #[error("orders mix fungible and unique maker assets")]
        MixedAssetClasses,
        #[error("batch of {orders} unique assets cannot fill a quantity of {requested}")]
        QuantityMismatch { orders: usize, requested: U256 },
        #[error("requested quantity is zero")]
        ZeroQuantity,
        #[error("orders supply {available} of {requested} maker asset")]
        InsufficientFillableAmount { requested: U256, available: U256 },
        #[error(transparent)]
        Math(#[from] Math),
    }

    #[derive(Debug, Eq, PartialEq, thiserror::Error)]
    pub enum Math {
        #[error("overflow")]
        Overflow,
        #[error("division by zero")]
        DivisionByZero,
    }
}
