use super::aggregate::Skip;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Payload handed from the skip modal to the checkout page
/// through the navigation (history) state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutHandoff {
    pub skip: Skip,
    pub gross: f64,
}

impl CheckoutHandoff {
    pub fn for_skip(skip: Skip) -> Self {
        let gross = skip.gross_price();
        Self { skip, gross }
    }

    pub fn hire_period(&self, start: NaiveDate) -> HirePeriod {
        HirePeriod::starting(start, self.skip.hire_period_days)
    }
}

/// Hire window shown on the checkout summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HirePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HirePeriod {
    /// The skip is collected on the last hire day, so a 14-day hire
    /// starting on the 1st ends on the 14th.
    pub fn starting(start: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.saturating_sub(1));
        Self {
            start,
            end: start + Duration::days(span),
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d %b %Y"),
            self.end.format("%d %b %Y")
        )
    }
}
