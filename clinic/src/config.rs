use std::env;

use crate::error::ConfigError;

const DEFAULT_PAGE_SIZE: u64 = 5;
const DEFAULT_LOG_FILTER: &str = "info,petclinic=debug";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Page size for the owner search listing
    pub owners_page_size: u64,
    /// Page size for the paged vet listing
    pub vets_page_size: u64,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            owners_page_size: page_size(&lookup, "OWNERS_PAGE_SIZE")?,
            vets_page_size: page_size(&lookup, "VETS_PAGE_SIZE")?,
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn page_size<F>(lookup: &F, key: &'static str) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}
