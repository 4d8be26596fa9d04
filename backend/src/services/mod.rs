pub mod business_days;

pub use business_days::{count_business_days, is_business_day, BusinessDayError};
