use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::Level;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const BRANCH_ID_VAR: &str = "LMS_BRANCH_ID";
pub const EVENTS_VAR: &str = "LMS_EVENTS";
pub const LOG_LEVEL_VAR: &str = "LMS_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "LMS_LOG_JSON";

// Configuration abstracts config options for library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub events: GatewayPublisherVia,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            events: GatewayPublisherVia::Logs,
            log_level: Level::INFO.to_string(),
            json_logs: false,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    // builds configuration from a variable lookup, unset variables keep their defaults
    pub fn from_vars<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup(BRANCH_ID_VAR).as_deref().unwrap_or("main"));
        if let Some(events) = lookup(EVENTS_VAR) {
            config.events = GatewayPublisherVia::from_str(events.as_str())?;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = Level::from_str(level.as_str()).map_err(|_| LibraryError::validation(
                format!("invalid log level {}", level).as_str(), Some(LOG_LEVEL_VAR.to_string())))?.to_string();
        }
        if let Some(json) = lookup(LOG_JSON_VAR) {
            config.json_logs = match json.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(LibraryError::validation(
                    format!("invalid json logs flag {}", json).as_str(), Some(LOG_JSON_VAR.to_string()))),
            };
        }
        Ok(config)
    }

    pub fn max_level(&self) -> Level {
        Level::from_str(self.log_level.as_str()).unwrap_or(Level::INFO)
    }
}
