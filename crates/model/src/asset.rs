//! Asset identification for orders.
//!
//! An order references the assets it trades through an encoded payload: a
//! 4-byte proxy identifier tagging the asset class, followed by the
//! ABI-encoded reference to the specific asset. The proxy identifier doubles
//! as the asset-class discriminator: ERC-20 assets are fungible quantities,
//! ERC-721 assets are unique id-addressed units.

use {
    alloy::primitives::{Address, U256},
    anyhow::{Context, Result, bail, ensure},
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
};

/// Discriminates how quantities of an asset behave when filling orders.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AssetClass {
    /// A divisible quantity of interchangeable units (ERC-20).
    Fungible,
    /// A single one-of-a-kind unit addressed by id (ERC-721).
    Unique,
}

/// Proxy id tagging ERC-20 asset data,
/// `bytes4(keccak256("ERC20Token(address)"))`.
pub const ERC20_PROXY_ID: [u8; 4] = [0xf4, 0x72, 0x61, 0xb0];

/// Proxy id tagging ERC-721 asset data,
/// `bytes4(keccak256("ERC721Token(address,uint256)"))`.
pub const ERC721_PROXY_ID: [u8; 4] = [0x02, 0x57, 0x17, 0x92];

/// A tagged, encoded reference to a specific asset.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum AssetData {
    Erc20 { token: Address },
    Erc721 { token: Address, token_id: U256 },
}

impl AssetData {
    pub fn class(&self) -> AssetClass {
        match self {
            Self::Erc20 { .. } => AssetClass::Fungible,
            Self::Erc721 { .. } => AssetClass::Unique,
        }
    }

    pub fn token(&self) -> Address {
        match self {
            Self::Erc20 { token } | Self::Erc721 { token, .. } => *token,
        }
    }

    /// Encodes the asset reference as the proxy id followed by the
    /// ABI-encoded payload, the form carried in signed orders.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Erc20 { token } => {
                let mut data = Vec::with_capacity(36);
                data.extend_from_slice(&ERC20_PROXY_ID);
                data.extend_from_slice(&address_word(token));
                data
            }
            Self::Erc721 { token, token_id } => {
                let mut data = Vec::with_capacity(68);
                data.extend_from_slice(&ERC721_PROXY_ID);
                data.extend_from_slice(&address_word(token));
                data.extend_from_slice(&token_id.to_be_bytes::<32>());
                data
            }
        }
    }

    /// Decodes an asset reference, rejecting unknown proxy ids and
    /// malformed payloads.
    pub fn decode(data: &[u8]) -> Result<Self> {
        ensure!(data.len() >= 4, "asset data too short for a proxy id");
        let (proxy_id, payload) = data.split_at(4);
        match proxy_id {
            id if id == ERC20_PROXY_ID => {
                ensure!(
                    payload.len() == 32,
                    "ERC-20 asset data payload must be a single word"
                );
                Ok(Self::Erc20 {
                    token: word_address(payload).context("ERC-20 token")?,
                })
            }
            id if id == ERC721_PROXY_ID => {
                ensure!(
                    payload.len() == 64,
                    "ERC-721 asset data payload must be two words"
                );
                Ok(Self::Erc721 {
                    token: word_address(&payload[..32]).context("ERC-721 token")?,
                    token_id: U256::from_be_slice(&payload[32..]),
                })
            }
            id => bail!("unknown asset proxy id 0x{}", hex::encode(id)),
        }
    }
}

// The zero-address ERC-20 placeholder exists for fixture building; real
// orders always carry a decoded wire payload.
impl Default for AssetData {
    fn default() -> Self {
        Self::Erc20 {
            token: Address::ZERO,
        }
    }
}

impl Serialize for AssetData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.encode())))
    }
}

impl<'de> Deserialize<'de> for AssetData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes =
            hex::decode(s.strip_prefix("0x").unwrap_or(&s)).map_err(de::Error::custom)?;
        Self::decode(&bytes).map_err(de::Error::custom)
    }
}

fn address_word(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    word
}

fn word_address(word: &[u8]) -> Result<Address> {
    ensure!(
        word[..12].iter().all(|byte| *byte == 0),
        "address word has nonzero padding"
    );
    Ok(Address::from_slice(&word[12..]))
}
