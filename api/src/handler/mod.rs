pub mod commands;
pub mod health;
pub mod query;
