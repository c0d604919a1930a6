use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::error;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

pub static DEFAULT_CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config { host: "localhost".to_string(), port: 8080 });

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a record that has no identifier or creation time yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User { name: name.into(), email: email.into(), ..Default::default() }
    }

    /// Accepts every record, empty fields included.
    pub fn validate(&self) -> Result<(), error::SystemError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
