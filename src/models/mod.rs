pub mod appointment;
pub mod query;
