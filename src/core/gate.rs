use crate::core::config::GateConfig;
use crate::core::error::GateError;
use url::Url;

/// Compares a candidate token against the configured secret.
#[derive(Clone, Debug)]
pub struct AccessGate {
    secret: Option<String>,
    target: Url,
}

impl AccessGate {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            target: config.target.clone(),
        }
    }

    /// Returns the redirect destination when `candidate` matches the secret.
    pub fn evaluate(&self, candidate: Option<&str>) -> Result<&Url, GateError> {
        match (self.secret.as_deref(), candidate) {
            // the non-empty guard keeps "" == "" from ever opening the gate
            (Some(secret), Some(candidate)) if !secret.is_empty() && candidate == secret => {
                Ok(&self.target)
            }
            _ => Err(GateError::Unauthorized),
        }
    }
}
