use super::{DeliveryBasisId, DeliveryTypeId, OilId, TradingDate};
use std::fmt::Display;

/// Optional equality filters over the codes embedded in an exchange product id.
///
/// An absent field places no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductFilter {
    /// Restrict to a single oil (product family) code
    pub oil_id: Option<OilId>,
    /// Restrict to a single delivery type code
    pub delivery_type_id: Option<DeliveryTypeId>,
    /// Restrict to a single delivery basis code
    pub delivery_basis_id: Option<DeliveryBasisId>,
}

/// The product filters together with a mandatory, inclusive date range.
///
/// The range has not been checked yet; see [`QueryLimits::validate`](super::QueryLimits::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DateRangeFilter {
    /// The first session date to include
    pub start_date: TradingDate,
    /// The last session date to include
    pub end_date: TradingDate,
    /// Restrict to a single oil (product family) code
    pub oil_id: Option<OilId>,
    /// Restrict to a single delivery type code
    pub delivery_type_id: Option<DeliveryTypeId>,
    /// Restrict to a single delivery basis code
    pub delivery_basis_id: Option<DeliveryBasisId>,
}

impl DateRangeFilter {
    /// Split off the product filters, leaving the raw bounds
    pub fn into_parts(self) -> (ProductFilter, TradingDate, TradingDate) {
        let product = ProductFilter {
            oil_id: self.oil_id,
            delivery_type_id: self.delivery_type_id,
            delivery_basis_id: self.delivery_basis_id,
        };
        (product, self.start_date, self.end_date)
    }
}

/// A client-supplied filter set, as parsed from the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSet {
    /// Product filters only
    Product(ProductFilter),
    /// Product filters plus a date range
    DateRange(DateRangeFilter),
}

impl From<ProductFilter> for FilterSet {
    fn from(value: ProductFilter) -> Self {
        Self::Product(value)
    }
}

impl From<DateRangeFilter> for FilterSet {
    fn from(value: DateRangeFilter) -> Self {
        Self::DateRange(value)
    }
}

/// An inclusive date range with `start <= end`.
///
/// Only the validator constructs these, so holding one is proof the range
/// passed the configured limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: TradingDate,
    end: TradingDate,
}

impl DateRange {
    pub(crate) fn new_unchecked(start: TradingDate, end: TradingDate) -> Self {
        Self { start, end }
    }

    /// The first session date included
    pub fn start(&self) -> TradingDate {
        self.start
    }

    /// The last session date included
    pub fn end(&self) -> TradingDate {
        self.end
    }

    /// Whether `date` lies within the range
    pub fn contains(&self, date: TradingDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A validated filter set, ready to be handed to a repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFilter {
    /// Equality filters on the embedded codes
    pub product: ProductFilter,
    /// An optional inclusive date range
    pub range: Option<DateRange>,
}

// The rendering lists every dimension in a fixed order, so two filters are
// equal exactly when their renderings are. The response cache relies on this.
impl Display for ResultFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn opt<T: Display>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        write!(
            f,
            "oil_id={}&delivery_type_id={}&delivery_basis_id={}&start_date={}&end_date={}",
            opt(&self.product.oil_id),
            opt(&self.product.delivery_type_id),
            opt(&self.product.delivery_basis_id),
            opt(&self.range.map(|range| range.start)),
            opt(&self.range.map(|range| range.end)),
        )
    }
}
