use std::{env::VarError, str::FromStr};

use crate::{api::error::SystemError, modules::user::model::{Config, DEFAULT_CONFIG}};

pub const MAX_CONNECTIONS: usize = 100;

// Unit is not defined anywhere; nothing reads it.
pub const DEFAULT_TIMEOUT: u64 = 30;

pub const MAX_RETRIES: u32 = 3;

pub struct Env {
    pub server: Config,
    pub workers: usize,
    pub max_connections: usize,
}

impl Env {
    pub fn from_env() -> Result<Self, SystemError> {
        let host = var_or("HOST", DEFAULT_CONFIG.host.clone())?;
        let port = var_or("PORT", DEFAULT_CONFIG.port)?;
        let workers = var_or("WORKERS", 2)?;
        let max_connections = var_or("MAX_CONNECTIONS", MAX_CONNECTIONS)?;

        Ok(Env { server: Config { host, port }, workers, max_connections })
    }
}

fn var_or<T: FromStr>(key: &'static str, default: T) -> Result<T, SystemError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().map_err(|_| SystemError::invalid_config(key, raw)),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(raw)) => {
            Err(SystemError::invalid_config(key, raw.to_string_lossy()))
        }
    }
}
