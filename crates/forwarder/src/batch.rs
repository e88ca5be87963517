//! Single-pass validation of order batches.
//!
//! Asset-class checks used to be scattered across call sites; they are
//! consolidated here so that fill arithmetic only ever operates on batches
//! whose homogeneity was established exactly once.

use {
    crate::fill::Error,
    itertools::Itertools,
    model::{AssetClass, Order},
};

/// An order batch whose maker assets were checked to share one asset class.
///
/// The batch preserves the caller-supplied sequence order; that order
/// defines fill priority and is never re-sorted.
#[derive(Clone, Copy, Debug)]
pub struct ValidatedBatch<'a> {
    orders: &'a [Order],
    class: AssetClass,
}

impl<'a> ValidatedBatch<'a> {
    /// Checks that all maker assets in the batch share one asset class.
    ///
    /// An empty batch validates as fungible: there is nothing to fill and
    /// no class to conflict with.
    pub fn new(orders: &'a [Order]) -> Result<Self, Error> {
        if !orders
            .iter()
            .map(|order| order.maker_asset_data.class())
            .all_equal()
        {
            return Err(Error::MixedAssetClasses);
        }
        let class = orders
            .first()
            .map(|order| order.maker_asset_data.class())
            .unwrap_or(AssetClass::Fungible);
        Ok(Self { orders, class })
    }

    pub fn orders(&self) -> &'a [Order] {
        self.orders
    }

    pub fn class(&self) -> AssetClass {
        self.class
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::{Address, U256},
        model::{AssetData, OrderBuilder},
    };

    fn order_with_class(asset_data: AssetData) -> Order {
        OrderBuilder::default()
            .with_maker_asset_data(asset_data)
            .build()
    }

    fn erc20() -> AssetData {
        AssetData::Erc20 {
            token: Address::repeat_byte(0x11),
        }
    }

    fn erc721() -> AssetData {
        AssetData::Erc721 {
            token: Address::repeat_byte(0x22),
            token_id: U256::from(7u64),
        }
    }

    #[test]
    fn empty_batch_is_fungible() {
        let batch = ValidatedBatch::new(&[]).unwrap();
        assert_eq!(batch.class(), AssetClass::Fungible);
        assert!(batch.is_empty());
    }

    #[test]
    fn homogeneous_batches_validate() {
        let fungible = [order_with_class(erc20()), order_with_class(erc20())];
        assert_eq!(
            ValidatedBatch::new(&fungible).unwrap().class(),
            AssetClass::Fungible
        );

        let unique = [order_with_class(erc721()), order_with_class(erc721())];
        assert_eq!(
            ValidatedBatch::new(&unique).unwrap().class(),
            AssetClass::Unique
        );
    }

    #[test]
    fn mixed_batches_fail_in_either_position() {
        let mixed = [order_with_class(erc20()), order_with_class(erc721())];
        assert_eq!(
            ValidatedBatch::new(&mixed).unwrap_err(),
            Error::MixedAssetClasses
        );

        let mixed = [order_with_class(erc721()), order_with_class(erc20())];
        assert_eq!(
            ValidatedBatch::new(&mixed).unwrap_err(),
            Error::MixedAssetClasses
        );
    }
}
