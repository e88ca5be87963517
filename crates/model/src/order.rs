//! Contains the order type as supplied by the order source, with wire
//! serialization as camelCase fields and decimal-string amounts.

use {
    crate::{asset::AssetData, signature::Signature},
    alloy::primitives::{Address, U256},
    number::u256_decimal::DecimalU256,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// A signed offer to exchange `maker_asset_amount` of the maker asset for
/// `taker_asset_amount` of the taker asset, optionally charging `taker_fee`
/// in a separate fee currency to `fee_recipient`.
///
/// Orders are immutable values identified by their signed content; they are
/// constructed once off-chain and passed by reference into calculation and
/// submission.
#[serde_as]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// The account offering the maker asset.
    pub maker: Address,
    /// The only account allowed to fill the order, or the zero address for
    /// an open order.
    pub taker: Address,
    #[serde_as(as = "DecimalU256")]
    pub maker_asset_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub taker_asset_amount: U256,
    pub maker_asset_data: AssetData,
    pub taker_asset_data: AssetData,
    /// Fee owed by the taker on a full fill, denominated in the fee
    /// currency. Prorated for partial fills.
    #[serde_as(as = "DecimalU256")]
    pub taker_fee: U256,
    pub fee_recipient: Address,
    /// Unix timestamp after which the order can no longer be filled.
    pub valid_to: u32,
    #[serde_as(as = "DecimalU256")]
    pub salt: U256,
    pub signature: Signature,
}

#[derive(Clone, Debug, Default)]
pub struct OrderBuilder(Order);

impl OrderBuilder {
    pub fn with_maker(mut self, maker: Address) -> Self {
        self.0.maker = maker;
        self
    }

    pub fn with_taker(mut self, taker: Address) -> Self {
        self.0.taker = taker;
        self
    }

    pub fn with_maker_asset_amount(mut self, amount: U256) -> Self {
        self.0.maker_asset_amount = amount;
        self
    }

    pub fn with_taker_asset_amount(mut self, amount: U256) -> Self {
        self.0.taker_asset_amount = amount;
        self
    }

    pub fn with_maker_asset_data(mut self, asset_data: AssetData) -> Self {
        self.0.maker_asset_data = asset_data;
        self
    }

    pub fn with_taker_asset_data(mut self, asset_data: AssetData) -> Self {
        self.0.taker_asset_data = asset_data;
        self
    }

    pub fn with_taker_fee(mut self, taker_fee: U256) -> Self {
        self.0.taker_fee = taker_fee;
        self
    }

    pub fn with_fee_recipient(mut self, fee_recipient: Address) -> Self {
        self.0.fee_recipient = fee_recipient;
        self
    }

    pub fn with_valid_to(mut self, valid_to: u32) -> Self {
        self.0.valid_to = valid_to;
        self
    }

    pub fn with_salt(mut self, salt: U256) -> Self {
        self.0.salt = salt;
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.0.signature = signature;
        self
    }

    pub fn build(self) -> Order {
        self.0
    }
}
