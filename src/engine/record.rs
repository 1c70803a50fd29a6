use chrono::Local;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    engine::{
        aggregate::{self, PrefillData},
        ledger::{self, OtLineItem},
        totals::{SalaryFormData, SalaryTotals},
        EngineError,
    },
    entity::{prelude::*, salary_record, sea_orm_active_enums::SalaryStatus},
};

/// Externally driven status machine. The engine only creates `Pending`
/// records and validates transitions/deletion preconditions.
pub fn can_transition(from: &SalaryStatus, to: &SalaryStatus) -> bool {
    matches!(
        (from, to),
        (SalaryStatus::Pending, SalaryStatus::Approved)
            | (SalaryStatus::Pending, SalaryStatus::Cancelled)
            | (SalaryStatus::Approved, SalaryStatus::Paid)
            | (SalaryStatus::Approved, SalaryStatus::Cancelled)
    )
}

/// Advisory duplicate pre-check: prior records for the same employee and
/// period are surfaced as a warning but never block a submission.
pub async fn find_existing(
    db: &DatabaseConnection,
    user_id: Uuid,
    month: u32,
    year: i32,
) -> Result<Vec<salary_record::Model>, EngineError> {
    aggregate::validate_period(month, year)?;

    let records = SalaryRecord::find()
        .filter(salary_record::Column::UserId.eq(user_id))
        .filter(salary_record::Column::Month.eq(month as i16))
        .filter(salary_record::Column::Year.eq(year as i16))
        .order_by_asc(salary_record::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(records)
}

pub struct SubmitArgs<'a> {
    pub user_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub prefill: &'a PrefillData,
    pub combined_ledger: &'a [OtLineItem],
    pub form: &'a SalaryFormData,
    pub totals: SalaryTotals,
    pub prepared_by: Uuid,
}

/// Assembles and persists the final record in one insert. The preparer
/// identity is an explicit argument, never read from ambient state.
pub async fn submit(db: &DatabaseConnection, args: SubmitArgs<'_>) -> Result<salary_record::Model, EngineError> {
    aggregate::validate_period(args.month, args.year)?;
    args.form.validate()?;

    let ot_details = serde_json::to_value(args.combined_ledger)
        .map_err(|err| EngineError::Validation(format!("overtime ledger is not serializable: {err}")))?;

    let now = Local::now().fixed_offset();

    let record = salary_record::ActiveModel {
        created_by: Set(Some(args.prepared_by)),
        updated_by: Set(Some(args.prepared_by)),
        created_at: Set(now),
        updated_at: Set(now),
        user_id: Set(args.user_id),
        month: Set(args.month as i16),
        year: Set(args.year as i16),
        base_salary: Set(args.prefill.user.base_salary),
        ot_amount: Set(ledger::total_ot_amount(args.combined_ledger)),
        ot_hours: Set(ledger::total_ot_hours(args.combined_ledger)),
        ot_details: Set(ot_details),
        fuel_costs: Set(args.prefill.calculated.fuel_costs),
        day_off_days: Set(args.prefill.calculated.day_off_days),
        remaining_vacation_days: Set(args.prefill.calculated.remaining_vacation_days),
        bonus: Set(args.form.bonus),
        commission: Set(args.form.commission),
        money_not_spent_on_holidays: Set(args.form.money_not_spent_on_holidays),
        other_income: Set(args.form.other_income),
        office_expenses: Set(args.form.office_expenses),
        social_security: Set(args.form.social_security),
        working_days: Set(args.form.working_days),
        cut_off_pay_days: Set(args.form.cut_off_pay_days),
        cut_off_pay_amount: Set(args.form.cut_off_pay_amount),
        notes: Set(args.form.notes.clone()),
        total_income: Set(args.totals.total_income),
        total_deductions: Set(args.totals.total_deductions),
        net_salary: Set(args.totals.net_salary),
        status: Set(SalaryStatus::Pending),
        payment_date: Set(None),
        ..Default::default()
    };

    let record = SalaryRecord::insert(record).exec_with_returning(db).await?;

    Ok(record)
}

/// Deletion is permitted only while a record is still pending; anything
/// later belongs to the books.
pub async fn delete(db: &DatabaseConnection, record: salary_record::Model) -> Result<(), EngineError> {
    if record.status != SalaryStatus::Pending {
        return Err(EngineError::InvalidState(format!(
            "salary record {} is {:?} and can no longer be deleted",
            record.id, record.status
        )));
    }

    SalaryRecord::delete_by_id(record.id).exec(db).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::engine::{
        aggregate::{PrefillCalculated, PrefillUser},
        vacation::VacationTier,
    };

    use super::*;

    fn pending_record() -> salary_record::Model {
        salary_record::Model {
            id: Uuid::new_v4(),
            created_at: Local::now().into(),
            updated_at: Local::now().into(),
            created_by: Some(Uuid::new_v4()),
            updated_by: None,
            user_id: Uuid::new_v4(),
            month: 6,
            year: 2025,
            base_salary: 6_600_000.0,
            ot_amount: 218_750.0,
            ot_hours: 3.0,
            ot_details: serde_json::json!([]),
            fuel_costs: 20_000.0,
            day_off_days: 0.5,
            remaining_vacation_days: 11.5,
            bonus: 100_000.0,
            commission: 0.0,
            money_not_spent_on_holidays: 0.0,
            other_income: 0.0,
            office_expenses: 15_000.0,
            social_security: 10_000.0,
            working_days: 22,
            cut_off_pay_days: 2.0,
            cut_off_pay_amount: 30_000.0,
            notes: String::new(),
            total_income: 6_938_750.0,
            total_deductions: 85_000.0,
            net_salary: 6_853_750.0,
            status: SalaryStatus::Pending,
            payment_date: None,
        }
    }

    fn empty_prefill() -> PrefillData {
        PrefillData {
            user: PrefillUser { base_salary: 6_600_000.0, vacation_days: 15 },
            calculated: PrefillCalculated {
                ot_amount: 0.0,
                ot_hours: 0.0,
                ot_details: Vec::new(),
                fuel_costs: 0.0,
                day_off_days: 0.0,
                remaining_vacation_days: 15.0,
                vacation_tier: VacationTier::Ample,
            },
        }
    }

    #[actix_web::test]
    async fn test_submit_rejects_out_of_range_period() {
        // No results are queued: reaching the store would panic the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let prefill = empty_prefill();
        let form = SalaryFormData::default();

        // Month 13, and a year that would silently truncate in an i16 column.
        for (month, year) in [(13, 2025), (0, 2025), (6, 70_000)] {
            let args = SubmitArgs {
                user_id: Uuid::new_v4(),
                month,
                year,
                prefill: &prefill,
                combined_ledger: &[],
                form: &form,
                totals: SalaryTotals { total_income: 6_600_000.0, total_deductions: 0.0, net_salary: 6_600_000.0 },
                prepared_by: Uuid::new_v4(),
            };

            let err = submit(&db, args).await.unwrap_err();
            assert!(matches!(err, EngineError::Validation(_)));
        }
    }

    #[actix_web::test]
    async fn test_find_existing_rejects_out_of_range_period() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = find_existing(&db, Uuid::new_v4(), 13, 2025).await.unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));

        let err = find_existing(&db, Uuid::new_v4(), 6, 70_000).await.unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_status_transitions() {
        use SalaryStatus::*;

        assert!(can_transition(&Pending, &Approved));
        assert!(can_transition(&Pending, &Cancelled));
        assert!(can_transition(&Approved, &Paid));
        assert!(can_transition(&Approved, &Cancelled));

        // Paid and cancelled are terminal; nothing skips approval.
        assert!(!can_transition(&Pending, &Paid));
        assert!(!can_transition(&Paid, &Cancelled));
        assert!(!can_transition(&Cancelled, &Pending));
        assert!(!can_transition(&Approved, &Pending));
    }

    #[actix_web::test]
    async fn test_delete_pending() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .into_connection();

        delete(&db, pending_record()).await.unwrap();
    }

    #[actix_web::test]
    async fn test_delete_non_pending_fails_without_touching_store() {
        // No results are queued: reaching the store would panic the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for status in [SalaryStatus::Approved, SalaryStatus::Paid, SalaryStatus::Cancelled] {
            let record = salary_record::Model { status: status.clone(), ..pending_record() };
            let err = delete(&db, record).await.unwrap_err();
            assert!(matches!(err, EngineError::InvalidState(_)));
        }
    }

    #[actix_web::test]
    async fn test_find_existing_surfaces_duplicates() {
        let record = pending_record();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![record.clone()]])
            .into_connection();

        let existing = find_existing(&db, record.user_id, 6, 2025).await.unwrap();
        assert_eq!(existing, vec![record]);
    }
}
