pub mod models;
pub mod sender;
