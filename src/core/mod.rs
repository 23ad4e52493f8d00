pub mod aggregate;
pub mod calculator;
pub mod config;
pub mod edit;
pub mod log;
pub mod records;
pub mod session;
