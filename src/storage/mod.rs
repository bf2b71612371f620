pub mod entities;
pub mod usage_log;
