use super::models::app_env::{AppEnv, Env};
use crate::error::AppError;
use std::env;
use std::str::FromStr;

impl AppEnv {
    /// Reads `ENV` (default `local`) and the optional `WEBHOOK_URL`.
    pub fn new() -> Result<AppEnv, AppError> {
        Self::from_vars(get_env_var("ENV"), get_env_var("WEBHOOK_URL"))
    }

    pub fn from_vars(env: Option<String>, webhook_url: Option<String>) -> Result<AppEnv, AppError> {
        let env = match env {
            Some(value) => Env::from_str(&value).map_err(AppError::Config)?,
            None => Env::Local,
        };

        Ok(AppEnv { env, webhook_url })
    }
}

fn get_env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
