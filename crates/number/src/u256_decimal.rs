//! Serialization of U256 amounts as decimal strings, the wire format used
//! for base-unit quantities.

use {
    alloy::primitives::U256,
    serde::{Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::fmt,
};

pub struct DecimalU256;

impl<'de> DeserializeAs<'de, U256> for DecimalU256 {
    fn deserialize_as<D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer)
    }
}

impl SerializeAs<U256> for DecimalU256 {
    fn serialize_as<S>(source: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(source, serializer)
    }
}

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor {}
    impl de::Visitor<'_> for Visitor {
        type Value = U256;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a u256 encoded as a decimal encoded string")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            U256::from_str_radix(s, 10).map_err(|err| {
                de::Error::custom(format!("failed to decode {s:?} as decimal u256: {err}"))
            })
        }
    }

    deserializer.deserialize_str(Visitor {})
}

/// Converts an amount of base units of a token with the specified amount of
/// decimals into its decimal representation as a string. This is the
/// human-readable form consumed by the display layer; it never feeds back
/// into amount arithmetic.
pub fn format_units(amount: U256, decimals: usize) -> String {
    let str_amount = amount.to_string();
    if decimals == 0 {
        str_amount
    } else if str_amount.len() <= decimals {
        format!("0.{str_amount:0>decimals$}")
    } else {
        format!(
            "{}.{}",
            &str_amount[0..str_amount.len() - decimals],
            &str_amount[str_amount.len() - decimals..]
        )
    }
}
