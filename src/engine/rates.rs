use serde::{Deserialize, Serialize};

use crate::{consts, engine::{ledger::OtCategory, EngineError}};

/// Overtime multipliers per day category. Supplied with every calculation
/// request and echoed back so the preparer can iterate on what-if rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub weekday_rate: f64,
    pub weekend_rate: f64,
    pub holiday_rate: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            weekday_rate: consts::DEFAULT_WEEKDAY_RATE,
            weekend_rate: consts::DEFAULT_WEEKEND_RATE,
            holiday_rate: consts::DEFAULT_HOLIDAY_RATE,
        }
    }
}

impl RateConfig {
    /// Overtime never pays less than regular time.
    pub fn validate(&self) -> Result<(), EngineError> {
        let rates = [
            ("weekday_rate", self.weekday_rate),
            ("weekend_rate", self.weekend_rate),
            ("holiday_rate", self.holiday_rate),
        ];

        for (name, rate) in rates {
            if !rate.is_finite() || rate < 1.0 {
                return Err(EngineError::Validation(format!("{name} must be at least 1.0")));
            }
        }

        Ok(())
    }

    pub fn multiplier(&self, category: OtCategory) -> f64 {
        match category {
            OtCategory::Weekday => self.weekday_rate,
            OtCategory::Weekend => self.weekend_rate,
            OtCategory::Holiday => self.holiday_rate,
        }
    }
}

/// Hourly base rate re-derived from the monthly salary over the standard
/// 22-day, 8-hour schedule.
pub fn hourly_rate(base_salary: f64) -> f64 {
    base_salary / (consts::STANDARD_WORKING_DAYS * consts::STANDARD_HOURS_PER_DAY)
}
