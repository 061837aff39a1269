pub mod appointments;
pub mod policy;
pub mod projector;
pub mod store;
