use serde::{Deserialize, Serialize};

use crate::engine::{ledger::{self, OtLineItem}, EngineError};

/// Preparer-entered income and deduction adjustments. Every monetary field
/// defaults to zero and must be non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryFormData {
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
}

impl SalaryFormData {
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("bonus", self.bonus),
            ("commission", self.commission),
            ("money_not_spent_on_holidays", self.money_not_spent_on_holidays),
            ("other_income", self.other_income),
            ("office_expenses", self.office_expenses),
            ("social_security", self.social_security),
            ("cut_off_pay_days", self.cut_off_pay_days),
            ("cut_off_pay_amount", self.cut_off_pay_amount),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Validation(format!("{name} must be zero or positive")));
            }
        }

        if self.working_days < 0 {
            return Err(EngineError::Validation("working_days must be zero or positive".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryTotals {
    pub total_income: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
}

/// Folds the combined overtime ledger and the preparer's adjustments into
/// the final figures. Line items were rounded at creation; sums are not
/// re-rounded. The net result is allowed to go negative and is surfaced
/// to the preparer as-is.
pub fn compute_totals(
    base_salary: f64,
    fuel_costs: f64,
    combined_ledger: &[OtLineItem],
    form: &SalaryFormData,
) -> Result<SalaryTotals, EngineError> {
    form.validate()?;

    if !base_salary.is_finite() || base_salary < 0.0 {
        return Err(EngineError::Validation("base salary must be zero or positive".to_string()));
    }
    if !fuel_costs.is_finite() || fuel_costs < 0.0 {
        return Err(EngineError::Validation("fuel costs must be zero or positive".to_string()));
    }

    let total_income = base_salary
        + ledger::total_ot_amount(combined_ledger)
        + fuel_costs
        + form.bonus
        + form.commission
        + form.money_not_spent_on_holidays
        + form.other_income;

    let cut_off_total = form.cut_off_pay_days * form.cut_off_pay_amount;
    let total_deductions = form.office_expenses + form.social_security + cut_off_total;

    Ok(SalaryTotals {
        total_income,
        total_deductions,
        net_salary: total_income - total_deductions,
    })
}

#[cfg(test)]
mod tests {
    use crate::engine::ledger::{OffDayCategory, OtCategory};

    use super::*;

    #[test]
    fn test_weekday_ot_with_manual_weekend_day() {
        // 3h weekday at 37,500/h x 1.5 plus one manual weekend day at 50,000.
        let ledger_items = vec![
            OtLineItem::manual_hours(OtCategory::Weekday, 3.0, 37_500.0 * 1.5).unwrap(),
            OtLineItem::manual_days(OffDayCategory::Weekend, 1.0, 50_000.0).unwrap(),
        ];
        assert_eq!(ledger::total_ot_amount(&ledger_items), 218_750.0);

        let form = SalaryFormData {
            bonus: 100_000.0,
            office_expenses: 15_000.0,
            social_security: 10_000.0,
            cut_off_pay_days: 2.0,
            cut_off_pay_amount: 30_000.0,
            ..Default::default()
        };

        let totals = compute_totals(6_600_000.0, 20_000.0, &ledger_items, &form).unwrap();

        assert_eq!(totals.total_income, 6_938_750.0);
        assert_eq!(totals.total_deductions, 85_000.0);
        assert_eq!(totals.net_salary, 6_853_750.0);
        assert_eq!(totals.net_salary, totals.total_income - totals.total_deductions);
    }

    #[test]
    fn test_cut_off_defaults_to_zero() {
        let totals = compute_totals(1_000_000.0, 0.0, &[], &SalaryFormData::default()).unwrap();

        assert_eq!(totals.total_income, 1_000_000.0);
        assert_eq!(totals.total_deductions, 0.0);
        assert_eq!(totals.net_salary, 1_000_000.0);
    }

    #[test]
    fn test_net_salary_may_go_negative() {
        let form = SalaryFormData {
            office_expenses: 500_000.0,
            cut_off_pay_days: 22.0,
            cut_off_pay_amount: 50_000.0,
            ..Default::default()
        };

        let totals = compute_totals(1_000_000.0, 0.0, &[], &form).unwrap();
        assert_eq!(totals.net_salary, -600_000.0);
    }

    #[test]
    fn test_rejects_negative_fields() {
        let form = SalaryFormData { bonus: -1.0, ..Default::default() };
        assert!(compute_totals(1_000_000.0, 0.0, &[], &form).is_err());

        assert!(compute_totals(-1.0, 0.0, &[], &SalaryFormData::default()).is_err());
        assert!(compute_totals(1.0, f64::NAN, &[], &SalaryFormData::default()).is_err());
    }
}
