/// Standard monthly schedule the hourly rate is derived from.
pub const STANDARD_WORKING_DAYS: f64 = 22.0;
pub const STANDARD_HOURS_PER_DAY: f64 = 8.0;

/// Remaining vacation days above this count as an ample balance;
/// anything above zero up to it counts as low.
pub const VACATION_AMPLE_ABOVE: f64 = 5.0;

/// Overtime multipliers offered when a calculation request carries none.
pub const DEFAULT_WEEKDAY_RATE: f64 = 1.5;
pub const DEFAULT_WEEKEND_RATE: f64 = 2.0;
pub const DEFAULT_HOLIDAY_RATE: f64 = 3.0;
