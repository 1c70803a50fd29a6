use chrono::{Days, NaiveDate, NaiveTime};

/// Monetary rounding applied once, at line-item creation. Sums of rounded
/// line items are never re-rounded.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First and last day of a calendar month.
pub fn month_range(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    let end = next_month.checked_sub_days(Days::new(1))?;

    Some((start, end))
}

/// Elapsed hours between two same-day clock times. Negative when `end`
/// precedes `start`; callers decide whether that is an error.
pub fn duration_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_minutes() as f64 / 60.0
}

/// Day-off counts are granted in whole or half days only.
pub fn is_half_day_step(days: f64) -> bool {
    days.is_finite() && days >= 0.0 && (days * 2.0).fract() == 0.0
}
