pub mod config;
pub mod quota;
pub mod validate;
