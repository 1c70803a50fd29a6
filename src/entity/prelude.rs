pub use super::day_off_request::Entity as DayOffRequest;
pub use super::holiday::Entity as Holiday;
pub use super::salary_record::Entity as SalaryRecord;
pub use super::user::Entity as User;
pub use super::work_request::Entity as WorkRequest;
