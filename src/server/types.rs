use crate::core::gate::AccessGate;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AppState {
    pub gate: AccessGate,
}

#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct StatusResponse {
    pub status: String,
}
