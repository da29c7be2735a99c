mod code;
mod config;
mod date;
mod filter;
mod trading_result;

pub use code::{CodeError, DeliveryBasisId, DeliveryTypeId, ExchangeProductId, OilId};
pub use config::{QueryLimits, ValidationError};
pub use date::{DateError, TradingDate};
pub use filter::{DateRange, DateRangeFilter, FilterSet, ProductFilter, ResultFilter};
pub use trading_result::TradingResult;
