//! Domain model for forwarded order fills: asset identification, the signed
//! order record supplied by the order source, and fixture building.

pub mod asset;
pub mod order;
pub mod signature;

pub use {
    asset::{AssetClass, AssetData},
    order::{Order, OrderBuilder},
    signature::Signature,
};
