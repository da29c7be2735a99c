use super::{DateRange, FilterSet, ResultFilter, TradingDate};

/// Limits on what a client may ask for. These are read once at startup and
/// passed to the validator; nothing consults ambient settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryLimits {
    /// The widest date range, in days between the bounds, a client may request
    #[cfg_attr(feature = "serde", serde(default = "default_max_days_range"))]
    pub max_days_range: u32,
    /// The largest number of trading dates a client may request
    #[cfg_attr(feature = "serde", serde(default = "default_max_days_limit"))]
    pub max_days_limit: u32,
}

fn default_max_days_range() -> u32 {
    7
}

fn default_max_days_limit() -> u32 {
    365
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_days_range: default_max_days_range(),
            max_days_limit: default_max_days_limit(),
        }
    }
}

/// A client-caused rejection of a filter set or parameter
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The range starts after it ends
    #[error("start_date={start_date} is after end_date={end_date}")]
    InvalidRange {
        /// The requested start
        start_date: TradingDate,
        /// The requested end
        end_date: TradingDate,
    },
    /// The range spans more days than allowed
    #[error("the requested range cannot exceed {max_days} days")]
    RangeTooWide {
        /// The configured maximum
        max_days: u32,
    },
    /// The requested number of trading dates is out of bounds
    #[error("days={days} must be between 1 and {max_days}")]
    DaysOutOfRange {
        /// The requested count
        days: i64,
        /// The configured maximum
        max_days: u32,
    },
}

impl QueryLimits {
    /// Validate a client-supplied filter set.
    ///
    /// Product codes are already length-checked by their types. A date range
    /// must satisfy `start_date <= end_date` and span at most
    /// `max_days_range` days; a single-day range always passes.
    pub fn validate(&self, filters: impl Into<FilterSet>) -> Result<ResultFilter, ValidationError> {
        match filters.into() {
            FilterSet::Product(product) => Ok(ResultFilter {
                product,
                range: None,
            }),
            FilterSet::DateRange(filter) => {
                let (product, start_date, end_date) = filter.into_parts();
                let range = self.validate_range(start_date, end_date)?;
                Ok(ResultFilter {
                    product,
                    range: Some(range),
                })
            }
        }
    }

    /// Check a pair of bounds against the configured width
    pub fn validate_range(
        &self,
        start_date: TradingDate,
        end_date: TradingDate,
    ) -> Result<DateRange, ValidationError> {
        if start_date > end_date {
            return Err(ValidationError::InvalidRange {
                start_date,
                end_date,
            });
        }
        if start_date.days_until(end_date) > i64::from(self.max_days_range) {
            return Err(ValidationError::RangeTooWide {
                max_days: self.max_days_range,
            });
        }
        Ok(DateRange::new_unchecked(start_date, end_date))
    }

    /// Check the number of trading dates requested, `1 <= days <= max_days_limit`
    pub fn validate_days(&self, days: i64) -> Result<i64, ValidationError> {
        if days < 1 || days > i64::from(self.max_days_limit) {
            Err(ValidationError::DaysOutOfRange {
                days,
                max_days: self.max_days_limit,
            })
        } else {
            Ok(days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRangeFilter, ProductFilter};
    use rstest::rstest;

    fn date(value: &str) -> TradingDate {
        value.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRangeFilter {
        DateRangeFilter {
            start_date: date(start),
            end_date: date(end),
            oil_id: None,
            delivery_type_id: None,
            delivery_basis_id: None,
        }
    }

    #[test]
    fn test_defaults() {
        let limits = QueryLimits::default();
        assert_eq!(limits.max_days_range, 7);
        assert_eq!(limits.max_days_limit, 365);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(365)]
    fn test_single_day_always_valid(#[case] max_days_range: u32) {
        let limits = QueryLimits {
            max_days_range,
            ..Default::default()
        };
        let filter = limits.validate(range("2025-07-17", "2025-07-17")).unwrap();
        let range = filter.range.unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_inverted_range() {
        let limits = QueryLimits::default();
        assert_eq!(
            limits.validate(range("2025-07-18", "2025-07-17")),
            Err(ValidationError::InvalidRange {
                start_date: date("2025-07-18"),
                end_date: date("2025-07-17"),
            })
        );
    }

    #[rstest]
    #[case(0, "2025-07-18", false)]
    #[case(1, "2025-07-18", true)]
    #[case(7, "2025-07-24", true)]
    #[case(7, "2025-07-25", false)]
    #[case(3, "2025-07-20", true)]
    #[case(3, "2025-07-21", false)]
    fn test_range_width(#[case] max_days_range: u32, #[case] end: &str, #[case] ok: bool) {
        let limits = QueryLimits {
            max_days_range,
            ..Default::default()
        };
        let result = limits.validate(range("2025-07-17", end));
        if ok {
            assert!(result.is_ok());
        } else {
            assert_eq!(
                result,
                Err(ValidationError::RangeTooWide {
                    max_days: max_days_range
                })
            );
        }
    }

    #[test]
    fn test_inverted_range_reported_before_width() {
        let limits = QueryLimits {
            max_days_range: 0,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(range("2025-08-30", "2025-07-01")),
            Err(ValidationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_product_filter_passes_through() {
        let product = ProductFilter {
            oil_id: Some("A106".parse().unwrap()),
            delivery_type_id: None,
            delivery_basis_id: Some("PDK".parse().unwrap()),
        };
        let filter = QueryLimits::default().validate(product.clone()).unwrap();
        assert_eq!(filter.product, product);
        assert_eq!(filter.range, None);
    }

    #[test]
    fn test_date_range_keeps_product_filters() {
        let mut request = range("2025-07-17", "2025-07-18");
        request.oil_id = Some("A106".parse().unwrap());
        let filter = QueryLimits::default().validate(request).unwrap();
        assert_eq!(filter.product.oil_id.unwrap().as_str(), "A106");
        assert!(filter.range.unwrap().contains(date("2025-07-18")));
    }

    #[rstest]
    #[case(1, true)]
    #[case(365, true)]
    #[case(0, false)]
    #[case(-1, false)]
    #[case(366, false)]
    fn test_days(#[case] days: i64, #[case] ok: bool) {
        assert_eq!(QueryLimits::default().validate_days(days).is_ok(), ok);
    }
}
