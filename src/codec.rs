//! Body encoding and decoding.
//!
//! Raw bytes are turned into a [`serde_json::Value`] by a [`Codec`], then into
//! typed values with `serde`. The default [`JsonCodec`] is plain `serde_json`;
//! a custom codec can be set through
//! [`KoreanBotsConfigBuilder::codec`](crate::KoreanBotsConfigBuilder::codec).
//!
//! Enum-valued fields on the wire use external names (`"online"`, `"관리"`)
//! rather than Rust identifiers. Those enums are declared with
//! `api_enum!`, which generates one mapping table used in both directions;
//! unknown names fail decoding with [`UnknownVariant`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Converts between raw body bytes and JSON values.
///
/// Implementations must be thread-safe; one codec instance is shared by all
/// calls made through a client.
pub trait Codec: fmt::Debug + Send + Sync {
    /// Parses raw body bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not a valid document.
    fn decode_value(&self, bytes: &[u8]) -> Result<serde_json::Value, serde_json::Error>;

    /// Serializes a value into body bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn encode_value(&self, value: &serde_json::Value) -> Result<Vec<u8>, serde_json::Error>;
}

/// The default codec, backed by `serde_json`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode_value(&self, bytes: &[u8]) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    fn encode_value(&self, value: &serde_json::Value) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(value)
    }
}

/// Decodes `bytes` into `T` through `codec`.
///
/// # Errors
///
/// Returns an error if the bytes do not parse or do not match `T`.
pub fn decode<T: DeserializeOwned>(
    codec: &dyn Codec,
    bytes: &[u8],
) -> Result<T, serde_json::Error> {
    let value = codec.decode_value(bytes)?;
    serde_json::from_value(value)
}

/// Encodes `value` into body bytes through `codec`.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as JSON.
pub fn encode<T: Serialize>(codec: &dyn Codec, value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let value = serde_json::to_value(value)?;
    codec.encode_value(&value)
}

/// A wire name that matches no variant of an API enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {enum_name} value '{value}'")]
pub struct UnknownVariant {
    /// The Rust name of the enum.
    pub enum_name: &'static str,
    /// The wire value that was received.
    pub value: String,
}

/// Declares an enum whose variants serialize as fixed external names.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr`, `Serialize` and
/// `Deserialize` from a single variant-to-name table.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the name used on the wire.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codec::UnknownVariant;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::codec::UnknownVariant {
                        enum_name: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use api_enum;
