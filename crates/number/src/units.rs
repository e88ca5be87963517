//! Helpers for scaling integer literals to base units. Intended for tests
//! and fixtures where amounts read better as `5.eth()` than as a 19-digit
//! literal.

use alloy::primitives::U256;

pub trait BaseUnits: Sized {
    /// Returns the amount as wei, i.e. unscaled base units.
    fn wei(self) -> U256;

    /// Returns the amount scaled by 1e9, the gwei convention.
    fn gwei(self) -> U256 {
        self.wei() * U256::from(1_000_000_000u64)
    }

    /// Returns the amount scaled by 1e18, the convention of ether and most
    /// fungible tokens.
    fn eth(self) -> U256 {
        self.wei() * U256::from(1_000_000_000_000_000_000u64)
    }
}

impl BaseUnits for u64 {
    fn wei(self) -> U256 {
        U256::from(self)
    }
}

impl BaseUnits for u128 {
    fn wei(self) -> U256 {
        U256::from(self)
    }
}
