use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    engine::{
        ledger::{self, OtCategory, OtLineItem},
        rates::{self, RateConfig},
        vacation::{self, VacationTier},
        EngineError,
    },
    entity::{
        holiday, prelude::*, sea_orm_active_enums::{RequestStatus, RequestType}, work_request,
    },
    utils,
};

/// Staging output shown to the preparer before they confirm a salary
/// record. Recomputed from scratch on every rate edit, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefillData {
    pub user: PrefillUser,
    pub calculated: PrefillCalculated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefillUser {
    pub base_salary: f64,
    pub vacation_days: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefillCalculated {
    pub ot_amount: f64,
    pub ot_hours: f64,
    pub ot_details: Vec<OtLineItem>,
    pub fuel_costs: f64,
    pub day_off_days: f64,
    pub remaining_vacation_days: f64,
    pub vacation_tier: VacationTier,
}

/// Holiday designation outranks the weekend; Saturday and Sunday outrank
/// the plain weekday.
pub fn day_category(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> OtCategory {
    if holidays.contains(&date) {
        OtCategory::Holiday
    } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        OtCategory::Weekend
    } else {
        OtCategory::Weekday
    }
}

/// Shared period boundary check: every public operation that takes a
/// (month, year) pair re-validates it rather than trusting the caller.
pub fn validate_period(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), EngineError> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::Validation(format!("month must be 1-12, got {month}")));
    }

    if !(1000..=9999).contains(&year) {
        return Err(EngineError::Validation(format!("year must be four digits, got {year}")));
    }

    utils::month_range(month, year)
        .ok_or_else(|| EngineError::Validation(format!("{year}-{month} is not a valid period")))
}

/// Aggregates one employee's approved overtime, field-work and day-off
/// records for a (month, year) period into prefill data. Read-only and
/// deterministic: identical inputs over an unchanged request set yield
/// identical line ordering (ascending date) and totals.
pub async fn aggregate(
    db: &DatabaseConnection,
    user_id: Uuid,
    month: u32,
    year: i32,
    rate_config: &RateConfig,
) -> Result<PrefillData, EngineError> {
    rate_config.validate()?;
    let (period_start, period_end) = validate_period(month, year)?;

    let Some(employee) = User::find_by_id(user_id).one(db).await? else {
        return Err(EngineError::NotFound("employee"));
    };

    let requests = WorkRequest::find()
        .filter(work_request::Column::CreatedBy.eq(user_id))
        .filter(work_request::Column::Status.eq(RequestStatus::Approved))
        .filter(work_request::Column::Date.between(period_start, period_end))
        .order_by_asc(work_request::Column::Date)
        // Same-date requests need a stable tiebreaker or recomputes could
        // reorder the ledger.
        .order_by_asc(work_request::Column::StartTime)
        .order_by_asc(work_request::Column::Id)
        .all(db)
        .await?;

    let holidays = Holiday::find()
        .filter(holiday::Column::Date.between(period_start, period_end))
        .all(db)
        .await?
        .into_iter()
        .map(|h| h.date)
        .collect::<HashSet<_>>();

    let day_offs = vacation::approved_day_offs_for_year(db, user_id, year).await?;

    let hourly_rate = rates::hourly_rate(employee.base_salary);
    let mut ot_details = Vec::with_capacity(requests.len());
    let mut fuel_costs = 0.0;

    for request in &requests {
        let total_hours = utils::duration_hours(request.start_time, request.end_time);
        if total_hours < 0.0 {
            return Err(EngineError::Validation(format!(
                "approved request {} ends before it starts",
                request.id
            )));
        }

        let category = day_category(request.date, &holidays);
        let multiplier = rate_config.multiplier(category);

        ot_details.push(OtLineItem::System {
            date: request.date,
            category,
            start_time: request.start_time,
            end_time: request.end_time,
            total_hours,
            hourly_rate,
            multiplier,
            amount: utils::round2(total_hours * hourly_rate * multiplier),
            source_request_id: request.id,
        });

        if request.request_type == RequestType::FieldWork {
            fuel_costs += request.fuel_amount;
        }
    }

    // A day-off request belongs to the period its start date falls in.
    let day_off_days = day_offs
        .iter()
        .filter(|request| request.start_date >= period_start && request.start_date <= period_end)
        .map(|request| request.day_count)
        .sum();

    let vacation_status = vacation::VacationStatus::derive(
        employee.vacation_days,
        vacation::used_vacation_days(&day_offs),
        day_off_days,
    );

    Ok(PrefillData {
        user: PrefillUser {
            base_salary: employee.base_salary,
            vacation_days: employee.vacation_days,
        },
        calculated: PrefillCalculated {
            ot_amount: ledger::total_ot_amount(&ot_details),
            ot_hours: ledger::total_ot_hours(&ot_details),
            ot_details,
            fuel_costs,
            day_off_days,
            remaining_vacation_days: vacation_status.remaining_vacation_days,
            vacation_tier: vacation_status.tier,
        },
    })
}
