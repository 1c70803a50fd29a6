use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    consts,
    engine::EngineError,
    entity::{day_off_request, prelude::*, sea_orm_active_enums::RequestStatus},
};

/// Risk tier shown to the payroll preparer next to the leave balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationTier {
    Ample,
    Low,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VacationStatus {
    pub total_vacation_days: f64,
    pub used_vacation_days_this_year: f64,
    pub remaining_vacation_days: f64,
    pub day_off_days_this_period: f64,
    pub tier: VacationTier,
}

impl VacationStatus {
    /// Pure balance derivation. The remaining count floors at zero and an
    /// employee with no allotment at all is exhausted by definition.
    pub fn derive(total_vacation_days: i32, used_this_year: f64, day_off_days_this_period: f64) -> Self {
        let total = f64::from(total_vacation_days.max(0));
        let used = used_this_year.max(0.0);
        let remaining = (total - used).max(0.0);

        let tier = if total <= 0.0 || remaining <= 0.0 {
            VacationTier::Exhausted
        } else if remaining > consts::VACATION_AMPLE_ABOVE {
            VacationTier::Ample
        } else {
            VacationTier::Low
        };

        Self {
            total_vacation_days: total,
            used_vacation_days_this_year: used,
            remaining_vacation_days: remaining,
            day_off_days_this_period,
            tier,
        }
    }
}

/// Year-to-date vacation consumption over already-fetched approved rows.
pub fn used_vacation_days(day_offs: &[day_off_request::Model]) -> f64 {
    day_offs.iter().map(|request| request.day_count).sum()
}

/// Approved day-off rows for one calendar year, oldest first.
pub async fn approved_day_offs_for_year(
    db: &DatabaseConnection,
    user_id: Uuid,
    year: i32,
) -> Result<Vec<day_off_request::Model>, EngineError> {
    let year_start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| EngineError::Validation(format!("{year} is not a valid year")))?;
    let year_end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| EngineError::Validation(format!("{year} is not a valid year")))?;

    let day_offs = DayOffRequest::find()
        .filter(day_off_request::Column::CreatedBy.eq(user_id))
        .filter(day_off_request::Column::Status.eq(RequestStatus::Approved))
        .filter(day_off_request::Column::StartDate.between(year_start, year_end))
        .order_by_asc(day_off_request::Column::StartDate)
        .all(db)
        .await?;

    Ok(day_offs)
}

/// Standalone balance lookup for one employee and calendar year. Period
/// attribution is the aggregator's job, so the per-period count is zero
/// here.
pub async fn compute_vacation_status(
    db: &DatabaseConnection,
    user_id: Uuid,
    year: i32,
) -> Result<VacationStatus, EngineError> {
    let Some(employee) = User::find_by_id(user_id).one(db).await? else {
        return Err(EngineError::NotFound("employee"));
    };

    let day_offs = approved_day_offs_for_year(db, user_id, year).await?;

    Ok(VacationStatus::derive(employee.vacation_days, used_vacation_days(&day_offs), 0.0))
}
