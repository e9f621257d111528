use serde::{Deserialize, Serialize};

use crate::constants::DEVLOG_VERSION;
use crate::view::StatusMessage;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    #[serde(flatten)]
    pub status: StatusMessage,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> HealthResponse {
        HealthResponse {
            status: StatusMessage::resource_found(),
            version: String::from(DEVLOG_VERSION),
        }
    }
}
