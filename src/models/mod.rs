pub mod date_key;
pub mod day_record;
pub mod policy;
pub mod session;
pub mod store_key;
pub mod week_summary;
