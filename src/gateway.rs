use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryError;

pub mod events;
pub mod factory;
pub mod logs;
pub mod noop;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Noop,
}

impl FromStr for GatewayPublisherVia {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logs" => Ok(GatewayPublisherVia::Logs),
            "none" | "noop" | "off" => Ok(GatewayPublisherVia::Noop),
            _ => Err(LibraryError::validation(
                format!("unsupported event publisher {}", s).as_str(), None)),
        }
    }
}
