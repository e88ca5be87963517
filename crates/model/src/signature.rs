//! Opaque order signatures.
//!
//! Orders are signed off-chain by their maker before they reach this
//! codebase; the bytes are carried through to submission untouched and never
//! verified here.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Signature(pub Vec<u8>);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(&self.0)))
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(s.strip_prefix("0x").unwrap_or(&s))
            .map(Self)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let signature = Signature(vec![0x1b, 0x04, 0x05]);
        let json = serde_json::to_value(&signature).unwrap();
        assert_eq!(json, serde_json::json!("0x1b0405"));
        assert_eq!(serde_json::from_value::<Signature>(json).unwrap(), signature);
    }

    #[test]
    fn rejects_invalid_hex() {
        assert!(serde_json::from_value::<Signature>(serde_json::json!("0xzz")).is_err());
    }
}
