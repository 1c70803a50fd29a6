pub mod prelude;

pub mod day_off_request;
pub mod holiday;
pub mod salary_record;
pub mod sea_orm_active_enums;
pub mod user;
pub mod work_request;
