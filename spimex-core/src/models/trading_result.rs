use super::{DeliveryBasisId, DeliveryTypeId, ExchangeProductId, OilId, TradingDate};

/// The outcome of trading one instrument during one session.
///
/// At most one record exists per `(date, exchange_product_id)`. The three
/// codes are derived from `exchange_product_id` at write time and always
/// agree with [`ExchangeProductId::oil_id`] and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TradingResult {
    /// The exchange's instrument code
    pub exchange_product_id: ExchangeProductId,
    /// The instrument's display name
    pub exchange_product_name: String,
    /// The oil (product family) code
    pub oil_id: OilId,
    /// The delivery basis code
    pub delivery_basis_id: DeliveryBasisId,
    /// The delivery basis display name
    pub delivery_basis_name: String,
    /// The delivery type code
    pub delivery_type_id: DeliveryTypeId,
    /// Contract volume, in the instrument's units
    pub volume: i64,
    /// Contract value, in rubles
    pub total: i64,
    /// Number of contracts
    pub count: i64,
    /// The session date
    pub date: TradingDate,
}

impl TradingResult {
    /// Whether the stored codes match the ones embedded in the product id
    pub fn codes_consistent(&self) -> bool {
        self.oil_id == self.exchange_product_id.oil_id()
            && self.delivery_basis_id == self.exchange_product_id.delivery_basis_id()
            && self.delivery_type_id == self.exchange_product_id.delivery_type_id()
    }
}
