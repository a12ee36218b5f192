use crate::utils::constants::{
    DEFAULT_PORT, DEFAULT_TARGET_URL, PORT_ENV, TARGET_URL_ENV, TOKEN_ENV,
};
use crate::utils::get_env::{env_var_to_port, get_env_var, optional_env_var};
use crate::utils::urls::to_url;
use anyhow::{Context, Error};
use url::Url;

/// Process-wide gate settings, read once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct GateConfig {
    pub secret: Option<String>,
    pub target: Url,
    pub port: u16,
}

impl GateConfig {
    pub fn new(secret: Option<String>, target: &str) -> Result<Self, Error> {
        let target = to_url(target).with_context(|| format!("invalid target url: {}", target))?;

        Ok(Self {
            secret: secret.filter(|s| !s.is_empty()),
            target,
            port: DEFAULT_PORT,
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        let target = optional_env_var(TARGET_URL_ENV).unwrap_or(DEFAULT_TARGET_URL.to_string());
        // compared byte for byte, so no trimming here
        let mut config = Self::new(get_env_var(TOKEN_ENV).ok(), &target)?;
        config.port = env_var_to_port(PORT_ENV, DEFAULT_PORT);

        Ok(config)
    }
}
