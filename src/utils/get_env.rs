use anyhow::Error;
use dotenv::dotenv;
use std::env;

pub fn get_env_var(key: &str) -> Result<String, Error> {
    dotenv().ok();
    Ok(env::var(key)?)
}

// unset and blank are treated the same
pub fn optional_env_var(key: &str) -> Option<String> {
    get_env_var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn env_var_to_port(key: &str, default: u16) -> u16 {
    optional_env_var(key)
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(default)
}
