use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::SalaryStatus;

/// The persisted outcome of one payroll calculation: preparer inputs,
/// computed outputs and provenance. `created_by` is the preparer, never
/// the employee. Monetary fields are immutable once `status` leaves
/// `Pending`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salary_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub user_id: Uuid,
    pub month: i16,
    pub year: i16,

    pub base_salary: f64,
    pub ot_amount: f64,
    pub ot_hours: f64,
    /// Combined system + manual overtime ledger, serialized tagged line items.
    pub ot_details: Json,
    pub fuel_costs: f64,
    pub day_off_days: f64,
    pub remaining_vacation_days: f64,

    pub bonus: f64,
    pub commission: f64,
    pub money_not_spent_on_holidays: f64,
    pub other_income: f64,
    pub office_expenses: f64,
    pub social_security: f64,
    pub working_days: i16,
    pub cut_off_pay_days: f64,
    pub cut_off_pay_amount: f64,
    pub notes: String,

    pub total_income: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
    pub status: SalaryStatus,
    pub payment_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
