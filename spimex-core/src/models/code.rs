//! Fixed-length instrument codes.
//!
//! An exchange product id such as `A106PDK001J` packs three codes at fixed
//! offsets: the oil (product family) code in the first four characters, the
//! delivery basis in the next three, and the delivery type in the final
//! character. Lengths are counted in characters, not bytes, matching how
//! SQLite's `substr` counts.

use std::{fmt::Display, ops::Deref, str::FromStr};

/// Errors that can occur when constructing a code from untrusted input
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CodeError {
    /// The value does not have the exact number of characters the code requires
    #[error("{field} must be exactly {expected} characters long, got {actual}")]
    Length {
        /// The name of the offending field
        field: &'static str,
        /// The required number of characters
        expected: usize,
        /// The number of characters supplied
        actual: usize,
    },
    /// The value is too short to contain all three embedded codes
    #[error("exchange_product_id must be at least {minimum} characters long, got {actual}")]
    TooShort {
        /// The minimum number of characters
        minimum: usize,
        /// The number of characters supplied
        actual: usize,
    },
}

macro_rules! fixed_code {
    ($struct:ident, $field:literal, $len:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        pub struct $struct(String);

        impl $struct {
            /// The exact number of characters in a valid code
            pub const LEN: usize = $len;

            /// View the code as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $struct {
            type Error = CodeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                let actual = value.chars().count();
                if actual == $len {
                    Ok(Self(value))
                } else {
                    Err(CodeError::Length {
                        field: $field,
                        expected: $len,
                        actual,
                    })
                }
            }
        }

        impl TryFrom<&str> for $struct {
            type Error = CodeError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::try_from(value.to_owned())
            }
        }

        impl FromStr for $struct {
            type Err = CodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s)
            }
        }

        impl From<$struct> for String {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl Deref for $struct {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        #[cfg(feature = "schemars")]
        impl schemars::JsonSchema for $struct {
            fn inline_schema() -> bool {
                true
            }

            fn schema_name() -> std::borrow::Cow<'static, str> {
                stringify!($struct).into()
            }

            fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
                schemars::json_schema!({
                    "type": "string",
                    "minLength": $len,
                    "maxLength": $len,
                })
            }
        }
    };
}

fixed_code!(OilId, "oil_id", 4, "The 4-character oil (product family) code");
fixed_code!(
    DeliveryBasisId,
    "delivery_basis_id",
    3,
    "The 3-character delivery basis code"
);
fixed_code!(
    DeliveryTypeId,
    "delivery_type_id",
    1,
    "The 1-character delivery type code"
);

/// The exchange's identifier for a traded instrument.
///
/// The derived codes are pure functions of this value; storage computes the
/// same substrings in generated columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ExchangeProductId(String);

impl ExchangeProductId {
    /// The shortest id that still holds all three embedded codes
    pub const MIN_LEN: usize = OilId::LEN + DeliveryBasisId::LEN + DeliveryTypeId::LEN;

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first four characters
    pub fn oil_id(&self) -> OilId {
        OilId(self.0.chars().take(OilId::LEN).collect())
    }

    /// Characters five through seven
    pub fn delivery_basis_id(&self) -> DeliveryBasisId {
        DeliveryBasisId(
            self.0
                .chars()
                .skip(OilId::LEN)
                .take(DeliveryBasisId::LEN)
                .collect(),
        )
    }

    /// The final character
    pub fn delivery_type_id(&self) -> DeliveryTypeId {
        DeliveryTypeId(self.0.chars().rev().take(DeliveryTypeId::LEN).collect())
    }
}

impl TryFrom<String> for ExchangeProductId {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let actual = value.chars().count();
        if actual < Self::MIN_LEN {
            Err(CodeError::TooShort {
                minimum: Self::MIN_LEN,
                actual,
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<&str> for ExchangeProductId {
    type Error = CodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl FromStr for ExchangeProductId {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<ExchangeProductId> for String {
    fn from(value: ExchangeProductId) -> Self {
        value.0
    }
}

impl Deref for ExchangeProductId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ExchangeProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for ExchangeProductId {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        "ExchangeProductId".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "minLength": ExchangeProductId::MIN_LEN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A106", true)]
    #[case("A10", false)]
    #[case("A1067", false)]
    #[case("", false)]
    fn test_oil_id_length(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(OilId::try_from(value).is_ok(), ok);
    }

    #[rstest]
    #[case("PDK", true)]
    #[case("PD", false)]
    #[case("PDKM", false)]
    #[case("", false)]
    fn test_delivery_basis_id_length(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(DeliveryBasisId::try_from(value).is_ok(), ok);
    }

    #[rstest]
    #[case("J", true)]
    #[case("JJ", false)]
    #[case("", false)]
    fn test_delivery_type_id_length(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(DeliveryTypeId::try_from(value).is_ok(), ok);
    }

    #[test]
    fn test_length_counts_characters() {
        // four cyrillic letters are eight bytes
        assert!(OilId::try_from("АИ95").is_ok());
        assert_eq!(
            DeliveryBasisId::try_from("ПДКМ"),
            Err(CodeError::Length {
                field: "delivery_basis_id",
                expected: 3,
                actual: 4,
            })
        );
    }

    #[rstest]
    #[case("A106PDK001J", "A106", "PDK", "J")]
    #[case("A106MST002K", "A106", "MST", "K")]
    #[case("B205NVO003J", "B205", "NVO", "J")]
    #[case("C303KZN004L", "C303", "KZN", "L")]
    #[case("D410PDK005J", "D410", "PDK", "J")]
    #[case("E500ABCZ", "E500", "ABC", "Z")]
    fn test_derived_codes(
        #[case] product: &str,
        #[case] oil: &str,
        #[case] basis: &str,
        #[case] kind: &str,
    ) {
        let id = ExchangeProductId::try_from(product).unwrap();
        assert_eq!(id.oil_id().as_str(), oil);
        assert_eq!(id.delivery_basis_id().as_str(), basis);
        assert_eq!(id.delivery_type_id().as_str(), kind);
    }

    #[test]
    fn test_derived_codes_are_substrings() {
        let id = ExchangeProductId::try_from("A106PDK001J").unwrap();
        assert_eq!(&id[0..4], id.oil_id().as_str());
        assert_eq!(&id[4..7], id.delivery_basis_id().as_str());
        assert!(id.ends_with(id.delivery_type_id().as_str()));
    }

    #[test]
    fn test_product_id_too_short() {
        assert_eq!(
            ExchangeProductId::try_from("A106PDK"),
            Err(CodeError::TooShort {
                minimum: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        assert!(serde_json::from_str::<OilId>(r#""A106""#).is_ok());
        assert!(serde_json::from_str::<OilId>(r#""A10""#).is_err());
        assert_eq!(
            serde_json::to_value(OilId::try_from("D410").unwrap()).unwrap(),
            serde_json::json!("D410")
        );
    }
}
