use super::*;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PrefillQuery {
    pub(super) user_id: Uuid,
    pub(super) month: u32,
    pub(super) year: i32,
    pub(super) weekday_rate: f64,
    pub(super) weekend_rate: f64,
    pub(super) holiday_rate: f64,
    /// Client-issued recompute sequence number, echoed back untouched so
    /// stale responses can be discarded on arrival.
    pub(super) seq: Option<u64>,
}

impl PrefillQuery {
    pub(super) fn rates(&self) -> RateConfig {
        RateConfig {
            weekday_rate: self.weekday_rate,
            weekend_rate: self.weekend_rate,
            holiday_rate: self.holiday_rate,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PrefillResponse {
    pub(super) seq: u64,
    pub(super) rates: RateConfig,
    pub(super) prefill: PrefillData,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PeriodQuery {
    pub(super) user_id: Uuid,
    pub(super) month: u32,
    pub(super) year: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct HistoryQuery {
    pub(super) user_id: Uuid,
}

/// One manual overtime entry as submitted. Weekday entries must be
/// hours-based; weekend/holiday entries may be hours- or day-based.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ManualEntry {
    pub(super) category: OtCategory,
    #[serde(default)]
    pub(super) hours: f64,
    #[serde(default)]
    pub(super) rate_per_hour: f64,
    #[serde(default)]
    pub(super) days: f64,
    #[serde(default)]
    pub(super) rate_per_day: f64,
}

impl ManualEntry {
    pub(super) fn to_line_item(&self) -> Result<OtLineItem, EngineError> {
        if self.hours > 0.0 || self.rate_per_hour > 0.0 {
            return OtLineItem::manual_hours(self.category, self.hours, self.rate_per_hour);
        }

        let category = match self.category {
            OtCategory::Weekday => {
                return Err(EngineError::Validation(
                    "weekday manual overtime must provide hours and an hourly rate".to_string(),
                ))
            }
            OtCategory::Weekend => OffDayCategory::Weekend,
            OtCategory::Holiday => OffDayCategory::Holiday,
        };

        OtLineItem::manual_days(category, self.days, self.rate_per_day)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SubmitSalary {
    pub(super) user_id: Uuid,
    pub(super) month: u32,
    pub(super) year: i32,
    #[serde(default)]
    pub(super) rates: RateConfig,
    #[serde(default)]
    pub(super) manual_entries: Vec<ManualEntry>,
    #[serde(flatten)]
    pub(super) form: SalaryFormData,
    pub(super) prepared_by: Uuid,
}
