pub mod commands;
pub mod health;
pub mod parking_log;
pub mod query;
pub mod slot;
pub mod user;
pub mod vehicle;
