use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Catalog identifier of a skip offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipId(pub i64);

impl SkipId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A skip offering as returned by the catalog endpoint.
///
/// Records are read-only: the widget never creates or mutates them, it only
/// filters, sorts and displays what the endpoint sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    pub id: SkipId,

    /// Capacity in cubic yards
    pub size: u32,

    #[serde(deserialize_with = "deserialize_decimal")]
    pub price_before_vat: f64,

    /// VAT percentage, e.g. `20` for 20%
    #[serde(deserialize_with = "deserialize_decimal")]
    pub vat: f64,

    pub hire_period_days: u32,

    pub allowed_on_road: bool,

    pub allows_heavy_waste: bool,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipValidationError {
    #[error("skip {id}: price before VAT is not a finite non-negative number ({value})")]
    InvalidPrice { id: i64, value: f64 },

    #[error("skip {id}: VAT is not a finite non-negative percentage ({value})")]
    InvalidVat { id: i64, value: f64 },
}

impl Skip {
    /// Customer-facing total: `price_before_vat * (1 + vat / 100)`
    pub fn gross_price(&self) -> f64 {
        self.price_before_vat * (1.0 + self.vat / 100.0)
    }

    pub fn vat_amount(&self) -> f64 {
        self.gross_price() - self.price_before_vat
    }

    /// Numeric fields must be finite and non-negative for the price
    /// arithmetic to mean anything.
    pub fn validate(&self) -> Result<(), SkipValidationError> {
        if !self.price_before_vat.is_finite() || self.price_before_vat < 0.0 {
            return Err(SkipValidationError::InvalidPrice {
                id: self.id.value(),
                value: self.price_before_vat,
            });
        }
        if !self.vat.is_finite() || self.vat < 0.0 {
            return Err(SkipValidationError::InvalidVat {
                id: self.id.value(),
                value: self.vat,
            });
        }
        Ok(())
    }
}

/// The endpoint has been seen sending decimals both as JSON numbers and as
/// numeric strings. `null` and unparseable text become NaN and are caught by
/// [`Skip::validate`] instead of failing the whole catalog.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Decimal>::deserialize(deserializer)? {
        Some(Decimal::Number(n)) => n,
        Some(Decimal::Text(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        None => f64::NAN,
    })
}

#[cfg(test)]
pub(crate) fn test_skip(id: i64, price: f64, vat: f64, road: bool, heavy: bool) -> Skip {
    Skip {
        id: SkipId::new(id),
        size: 4,
        price_before_vat: price,
        vat,
        hire_period_days: 14,
        allowed_on_road: road,
        allows_heavy_waste: heavy,
    }
}
