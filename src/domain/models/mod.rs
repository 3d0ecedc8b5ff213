pub mod client;
pub mod schedule;
pub mod session;
pub mod slot;
pub mod trainer;
