pub mod client;
pub mod health;
pub mod import;
pub mod session;
pub mod slots;
pub mod trainer;
