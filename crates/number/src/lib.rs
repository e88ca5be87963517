pub mod u256_decimal;
pub mod u256_ext;
pub mod units;
