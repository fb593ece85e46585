use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};

pub const DEFAULT_API_BASE: &str = "https://maps.googleapis.com";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub google_maps: GoogleMapsConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct GoogleMapsConfig {
    pub api_base: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageConfig {
    Memory { capacity: Option<usize> },
    Postgres { url: String, max_connections: u32 },
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| config_error("GOOGLE_MAPS_API_KEY not allowed to be empty"))?;

        let google_maps = GoogleMapsConfig {
            api_base: lookup("GOOGLE_MAPS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into()),
            api_key,
            timeout: Duration::from_secs(
                parse_or(&lookup, "GOOGLE_MAPS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            ),
        };

        let storage = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => StorageConfig::Postgres {
                url,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    DEFAULT_MAX_CONNECTIONS,
                )?,
            },
            None => StorageConfig::Memory {
                capacity: parse_optional(&lookup, "MEMORY_STORE_CAPACITY")?,
            },
        };

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(addr) => parse("LISTEN_ADDR", &addr)?,
            None => parse("LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?,
        };

        Ok(Self {
            listen_addr,
            google_maps,
            storage,
        })
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value
        .parse()
        .map_err(|_| config_error(format!("{} has an invalid value: {:?}", key, value)))
}

fn parse_optional<T, F>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|value| parse(key, &value)).transpose()
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_optional(lookup, key)?.unwrap_or(default))
}
