//! Extension trait for U256 arithmetic operations.

use {
    alloy::primitives::U256,
    anyhow::Result,
    num::{BigInt, BigRational, BigUint, Zero},
};

/// Extension trait for U256 to add utility methods.
pub trait U256Ext: Sized {
    /// Ceiling division: (self + other - 1) / other
    fn checked_ceil_div(&self, other: &Self) -> Option<Self>;

    /// `self * num / denom` with a full-precision intermediate product.
    ///
    /// The quotient truncates toward zero, matching how fixed-point division
    /// behaves on-chain. The product is taken at arbitrary precision, so a
    /// 256-bit overflow of `self * num` alone does not fail the operation.
    /// Returns `None` on a zero denominator or when the quotient does not
    /// fit 256 bits.
    fn checked_mul_div(&self, num: &Self, denom: &Self) -> Option<Self>;

    /// `self * num / denom` with the quotient rounded up.
    fn checked_mul_div_ceil(&self, num: &Self, denom: &Self) -> Option<Self>;

    /// Convert to BigInt.
    fn to_big_int(&self) -> BigInt;

    /// Convert to BigUint.
    fn to_big_uint(&self) -> BigUint;

    /// Convert to BigRational.
    fn to_big_rational(&self) -> BigRational;

    /// Create from BigInt.
    fn from_big_int(input: &BigInt) -> Result<Self>;

    /// Create from BigUint.
    fn from_big_uint(input: &BigUint) -> Result<Self>;

    /// Create from BigRational, truncating toward zero.
    fn from_big_rational(value: &BigRational) -> Result<Self>;
}

impl U256Ext for U256 {
    fn checked_ceil_div(&self, other: &Self) -> Option<Self> {
        self.checked_add(other.checked_sub(U256::from(1u64))?)?
            .checked_div(*other)
    }

    fn checked_mul_div(&self, num: &Self, denom: &Self) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        let quotient = self.to_big_uint() * num.to_big_uint() / denom.to_big_uint();
        Self::from_big_uint(&quotient).ok()
    }

    fn checked_mul_div_ceil(&self, num: &Self, denom: &Self) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        let denom = denom.to_big_uint();
        let product = self.to_big_uint() * num.to_big_uint();
        let quotient = (product + &denom - BigUint::from(1u8)) / &denom;
        Self::from_big_uint(&quotient).ok()
    }

    fn to_big_int(&self) -> BigInt {
        BigInt::from_biguint(num::bigint::Sign::Plus, self.to_big_uint())
    }

    fn to_big_uint(&self) -> BigUint {
        BigUint::from_bytes_be(self.to_be_bytes::<32>().as_slice())
    }

    fn to_big_rational(&self) -> BigRational {
        BigRational::new(self.to_big_int(), 1.into())
    }

    fn from_big_int(input: &BigInt) -> Result<Self> {
        anyhow::ensure!(input.sign() != num::bigint::Sign::Minus, "negative");
        Self::from_big_uint(input.magnitude())
    }

    fn from_big_uint(input: &BigUint) -> Result<Self> {
        let bytes = input.to_bytes_be();
        anyhow::ensure!(bytes.len() <= 32, "too large");
        Ok(U256::from_be_slice(&bytes))
    }

    fn from_big_rational(value: &BigRational) -> Result<Self> {
        anyhow::ensure!(*value.denom() != BigInt::zero(), "zero denominator");
        Self::from_big_int(&(value.numer() / value.denom()))
    }
}
