pub mod id;
pub mod parking_log;
pub mod slot;
pub mod user;
pub mod vehicle;
