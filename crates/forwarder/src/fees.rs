//! Fee-currency acquisition and the protocol fee skim.

use {
    crate::{
        batch::ValidatedBatch,
        fill::{BPS_DENOMINATOR, Error, Math, mul_div_ceil},
    },
    alloy::primitives::U256,
    number::u256_ext::U256Ext,
};

/// Outcome of routing input currency through the fee-order batch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeAcquisition {
    /// Input currency consumed by the fee orders.
    pub input: U256,
    /// Fee currency acquired, net of the fee orders' own fees.
    pub acquired: U256,
}

/// Determines how much input currency must be diverted through the fee-order
/// batch to come out holding `needed` units of fee currency.
///
/// Fee orders sell the fee currency itself, so each order's own taker fee is
/// netted out of its output; an order whose fee meets or exceeds its output
/// cannot contribute and is skipped. The final order's partial cost rounds
/// up, so the on-chain floor cannot deliver less than `needed`.
pub fn acquire_fee_currency(
    fee_orders: ValidatedBatch<'_>,
    needed: U256,
) -> Result<FeeAcquisition, Error> {
    let mut acquisition = FeeAcquisition::default();
    let mut remaining = needed;
    for order in fee_orders.orders() {
        if remaining.is_zero() {
            break;
        }
        let net_output = order.maker_asset_amount.saturating_sub(order.taker_fee);
        if net_output.is_zero() {
            tracing::debug!(salt = %order.salt, "skipped fee order consumed by its own fee");
            continue;
        }
        let (input, acquired) = if remaining >= net_output {
            (order.taker_asset_amount, net_output)
        } else {
            (
                mul_div_ceil(remaining, order.taker_asset_amount, net_output)?,
                remaining,
            )
        };
        acquisition.input = acquisition.input.checked_add(input).ok_or(Math::Overflow)?;
        acquisition.acquired = acquisition
            .acquired
            .checked_add(acquired)
            .ok_or(Math::Overflow)?;
        remaining -= acquired;
        tracing::trace!(%input, %acquired, "filled fee order");
    }
    if !remaining.is_zero() {
        return Err(Error::InsufficientFeeOrders {
            required: needed,
            available: acquisition.acquired,
        });
    }
    Ok(acquisition)
}

/// The proportional protocol fee on top of `total_input`, truncating toward
/// zero. Additive: the skim is owed on top of the input consumed, never
/// deducted from it.
pub fn protocol_fee_skim(total_input: U256, proportion_bps: u16) -> Result<U256, Math> {
    total_input
        .checked_mul_div(&U256::from(proportion_bps), &U256::from(BPS_DENOMINATOR))
        .ok_or(Math::Overflow)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::Address,
        model::{AssetData, Order, OrderBuilder},
        number::units::BaseUnits,
    };

    fn fee_order(maker_amount: U256, taker_amount: U256, taker_fee: U256) -> Order {
        OrderBuilder::default()
            .with_maker_asset_amount(maker_amount)
            .with_taker_asset_amount(taker_amount)
            .with_maker_asset_data(AssetData::Erc20 {
                token: Address::repeat_byte(0x2f),
            })
            .with_taker_fee(taker_fee)
            .build()
    }

    fn batch(orders: &[Order]) -> ValidatedBatch<'_> {
        ValidatedBatch::new(orders).unwrap()
    }

    #[test]
    fn nothing_needed_consumes_nothing() {
        let orders = [fee_order(10u64.eth(), 5u64.eth(), U256::ZERO)];
        let acquisition = acquire_fee_currency(batch(&orders), U256::ZERO).unwrap();
        assert_eq!(acquisition, FeeAcquisition::default());
    }

    #[test]
    fn spans_orders_and_rounds_the_partial_cost_up() {
        let orders = [
            fee_order(U256::from(4u64), U256::from(8u64), U256::ZERO),
            // 3 net output for 10 input
            fee_order(U256::from(3u64), U256::from(10u64), U256::ZERO),
        ];
        // 4 from the first order, 2 of the second at ceil(2 * 10 / 3) = 7
        let acquisition = acquire_fee_currency(batch(&orders), U256::from(6u64)).unwrap();
        assert_eq!(acquisition.input, U256::from(15u64));
        assert_eq!(acquisition.acquired, U256::from(6u64));
    }

    #[test]
    fn nets_out_the_fee_orders_own_fee() {
        // 10 gross, 4 taken by the order's own fee
        let orders = [fee_order(10u64.eth(), 5u64.eth(), 4u64.eth())];
        let acquisition = acquire_fee_currency(batch(&orders), 6u64.eth()).unwrap();
        assert_eq!(acquisition.input, 5u64.eth());
        assert_eq!(acquisition.acquired, 6u64.eth());
    }

    #[test]
    fn skips_orders_consumed_by_their_own_fee() {
        let orders = [
            fee_order(10u64.eth(), 5u64.eth(), 10u64.eth()),
            fee_order(2u64.eth(), 1u64.eth(), U256::ZERO),
        ];
        let acquisition = acquire_fee_currency(batch(&orders), 2u64.eth()).unwrap();
        assert_eq!(acquisition.input, 1u64.eth());
    }

    #[test]
    fn reports_the_shortfall() {
        let orders = [fee_order(2u64.eth(), 1u64.eth(), U256::ZERO)];
        assert_eq!(
            acquire_fee_currency(batch(&orders), 3u64.eth()).unwrap_err(),
            Error::InsufficientFeeOrders {
                required: 3u64.eth(),
                available: 2u64.eth(),
            }
        );
    }

    #[test]
    fn skim_truncates_toward_zero() {
        assert_eq!(
            protocol_fee_skim(U256::from(10_001u64), 150).unwrap(),
            // floor(10001 * 150 / 10000) = floor(150.015)
            U256::from(150u64)
        );
        assert_eq!(protocol_fee_skim(U256::from(666u64), 0).unwrap(), U256::ZERO);
        assert_eq!(protocol_fee_skim(U256::MAX, 10_000).unwrap(), U256::MAX);
    }
}
