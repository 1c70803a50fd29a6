use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{engine::EngineError, utils};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtCategory {
    Weekday,
    Weekend,
    Holiday,
}

/// Categories a day-based manual entry may carry. Weekday overtime is
/// always hours-based, so the weekday case is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffDayCategory {
    Weekend,
    Holiday,
}

impl From<OffDayCategory> for OtCategory {
    fn from(category: OffDayCategory) -> Self {
        match category {
            OffDayCategory::Weekend => OtCategory::Weekend,
            OffDayCategory::Holiday => OtCategory::Holiday,
        }
    }
}

/// One overtime ledger line. System lines come out of the period
/// aggregator with full provenance; manual lines are keyed in by the
/// payroll preparer for time the request system never captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OtLineItem {
    System {
        date: NaiveDate,
        category: OtCategory,
        start_time: NaiveTime,
        end_time: NaiveTime,
        total_hours: f64,
        hourly_rate: f64,
        multiplier: f64,
        amount: f64,
        source_request_id: Uuid,
    },
    ManualHours {
        category: OtCategory,
        total_hours: f64,
        rate_per_hour: f64,
        amount: f64,
    },
    ManualDays {
        category: OffDayCategory,
        total_days: f64,
        rate_per_day: f64,
        amount: f64,
    },
}

impl OtLineItem {
    /// Hours-based manual entry. Requires hours > 0 and a positive rate.
    pub fn manual_hours(category: OtCategory, total_hours: f64, rate_per_hour: f64) -> Result<Self, EngineError> {
        if !total_hours.is_finite() || total_hours <= 0.0 || !rate_per_hour.is_finite() || rate_per_hour <= 0.0 {
            return Err(EngineError::Validation(
                "manual overtime needs hours and an hourly rate above zero".to_string(),
            ));
        }

        Ok(Self::ManualHours {
            category,
            total_hours,
            rate_per_hour,
            amount: utils::round2(total_hours * rate_per_hour),
        })
    }

    /// Day-based manual entry for weekend/holiday work, in half-day steps.
    pub fn manual_days(category: OffDayCategory, total_days: f64, rate_per_day: f64) -> Result<Self, EngineError> {
        if total_days <= 0.0 || !rate_per_day.is_finite() || rate_per_day <= 0.0 {
            return Err(EngineError::Validation(
                "manual overtime needs days and a daily rate above zero".to_string(),
            ));
        }

        if !utils::is_half_day_step(total_days) {
            return Err(EngineError::Validation(
                "day-based overtime must be counted in half-day steps".to_string(),
            ));
        }

        Ok(Self::ManualDays {
            category,
            total_days,
            rate_per_day,
            amount: utils::round2(total_days * rate_per_day),
        })
    }

    pub fn amount(&self) -> f64 {
        match self {
            Self::System { amount, .. } | Self::ManualHours { amount, .. } | Self::ManualDays { amount, .. } => *amount,
        }
    }

    pub fn hours(&self) -> f64 {
        match self {
            Self::System { total_hours, .. } | Self::ManualHours { total_hours, .. } => *total_hours,
            Self::ManualDays { .. } => 0.0,
        }
    }

    pub fn days(&self) -> f64 {
        match self {
            Self::ManualDays { total_days, .. } => *total_days,
            _ => 0.0,
        }
    }

    pub fn is_manual(&self) -> bool {
        !matches!(self, Self::System { .. })
    }
}

/// Totals are always recomputed from the live ledger, never cached.
pub fn total_ot_amount(items: &[OtLineItem]) -> f64 {
    items.iter().map(OtLineItem::amount).sum()
}

pub fn total_ot_hours(items: &[OtLineItem]) -> f64 {
    items.iter().map(OtLineItem::hours).sum()
}

pub fn total_ot_days(items: &[OtLineItem]) -> f64 {
    items.iter().map(OtLineItem::days).sum()
}

/// Pending weekday fields: hours-based only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekdayDraft {
    pub hours: f64,
    pub rate_per_hour: f64,
}

/// Pending weekend/holiday fields: hours-based or day-based. Hours win
/// when both are filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffDayDraft {
    pub hours: f64,
    pub rate_per_hour: f64,
    pub days: f64,
    pub rate_per_day: f64,
}

/// Staging fields for a not-yet-added manual entry, distinct from manual
/// line items already sitting in the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualOtState {
    pub weekday: WeekdayDraft,
    pub weekend: OffDayDraft,
}

/// The in-progress calculation a preparer works on: system-derived lines
/// from the aggregator, manual lines added on top, and the staging fields
/// the next manual line is typed into. Lives in the caller's session until
/// submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worksheet {
    system_items: Vec<OtLineItem>,
    manual_items: Vec<OtLineItem>,
    pub staging: ManualOtState,
}

impl Worksheet {
    pub fn new(system_items: Vec<OtLineItem>) -> Self {
        Self { system_items, ..Default::default() }
    }

    /// Turns the staged fields for `category` into a manual ledger line.
    /// Raises `Validation` instead of silently doing nothing when the
    /// staged fields are incomplete.
    pub fn add_manual_detail(&mut self, category: OtCategory) -> Result<(), EngineError> {
        let item = match category {
            OtCategory::Weekday => {
                let draft = self.staging.weekday;
                OtLineItem::manual_hours(OtCategory::Weekday, draft.hours, draft.rate_per_hour)?
            }
            OtCategory::Weekend | OtCategory::Holiday => {
                let draft = self.staging.weekend;
                if draft.hours > 0.0 && draft.rate_per_hour > 0.0 {
                    OtLineItem::manual_hours(category, draft.hours, draft.rate_per_hour)?
                } else {
                    let off_day = match category {
                        OtCategory::Holiday => OffDayCategory::Holiday,
                        _ => OffDayCategory::Weekend,
                    };
                    OtLineItem::manual_days(off_day, draft.days, draft.rate_per_day)?
                }
            }
        };

        self.manual_items.push(item);
        Ok(())
    }

    /// Resets the staging fields only. Manual items already in the ledger
    /// stay put.
    pub fn clear_manual_ot(&mut self) {
        self.staging = ManualOtState::default();
    }

    /// Removes one previously added manual line. System lines are never
    /// removable through the worksheet.
    pub fn remove_manual_detail(&mut self, index: usize) -> Result<OtLineItem, EngineError> {
        if index >= self.manual_items.len() {
            return Err(EngineError::Validation(format!("no manual overtime line at index {index}")));
        }

        Ok(self.manual_items.remove(index))
    }

    /// Combined ledger: system lines in date order first, then manual
    /// lines in insertion order.
    pub fn reconcile(&self) -> Vec<OtLineItem> {
        let mut combined = Vec::with_capacity(self.system_items.len() + self.manual_items.len());
        combined.extend(self.system_items.iter().cloned());
        combined.extend(self.manual_items.iter().cloned());
        combined
    }

    pub fn manual_items(&self) -> &[OtLineItem] {
        &self.manual_items
    }

    pub fn total_ot_amount(&self) -> f64 {
        total_ot_amount(&self.reconcile())
    }

    pub fn total_ot_hours(&self) -> f64 {
        total_ot_hours(&self.reconcile())
    }

    pub fn total_ot_days(&self) -> f64 {
        total_ot_days(&self.reconcile())
    }
}
