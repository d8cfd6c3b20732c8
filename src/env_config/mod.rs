pub mod build_env;
pub mod load_config;
pub mod models;
