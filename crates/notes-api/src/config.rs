use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use notes_core::StoreLimits;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_RPC_MAX_BODY_BYTES: usize = 1_048_576;

/// Keys, quotes, the boolean, and formatting whitespace around the text fields
const JSON_ENVELOPE_BYTES: usize = 1_024;
/// A text char escaped as a `\uXXXX\uXXXX` surrogate pair
const JSON_MAX_BYTES_PER_CHAR: usize = 12;

/// Field tags, length prefixes, the id, and the wrapper messages of an update
const PROTOBUF_ENVELOPE_BYTES: usize = 128;
const UTF8_MAX_BYTES_PER_CHAR: usize = 4;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub limits: StoreLimits,
    /// Upper bound applied to every list request's limit
    pub list_max_limit: i64,
    /// Body limit of the JSON note routes, large enough for any note within `limits`
    pub json_max_body_bytes: usize,
    pub rpc_max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "NOTES_API_BIND_ADDR", "127.0.0.1:8081");

        let defaults = StoreLimits::default();
        let limits = StoreLimits {
            max_title_len: parse_in_range(
                &lookup,
                "NOTES_MAX_TITLE_LEN",
                defaults.max_title_len,
                1..=65_536,
            )?,
            max_context_len: parse_in_range(
                &lookup,
                "NOTES_MAX_CONTEXT_LEN",
                defaults.max_context_len,
                1..=1_048_576,
            )?,
            max_author_len: parse_in_range(
                &lookup,
                "NOTES_MAX_AUTHOR_LEN",
                defaults.max_author_len,
                1..=65_536,
            )?,
        };

        let list_max_limit = parse_in_range(&lookup, "NOTES_LIST_MAX_LIMIT", 1_000, 1..=100_000)?;

        let rpc_floor = max_protobuf_body_bytes(&limits);
        let rpc_max_body_bytes = parse_in_range(
            &lookup,
            "NOTES_RPC_MAX_BODY_BYTES",
            DEFAULT_RPC_MAX_BODY_BYTES.max(rpc_floor),
            1_024..=16_777_216,
        )?;
        if rpc_max_body_bytes < rpc_floor {
            return Err(ConfigError::Invalid(format!(
                "NOTES_RPC_MAX_BODY_BYTES must be at least {rpc_floor} to hold a note at the configured field limits"
            )));
        }

        Ok(Self {
            bind_addr,
            json_max_body_bytes: max_json_body_bytes(&limits),
            limits,
            list_max_limit,
            rpc_max_body_bytes,
        })
    }
}

const fn max_text_chars(limits: &StoreLimits) -> usize {
    limits.max_title_len + limits.max_context_len + limits.max_author_len
}

/// Largest JSON create or patch body a note within `limits` can need
const fn max_json_body_bytes(limits: &StoreLimits) -> usize {
    max_text_chars(limits) * JSON_MAX_BYTES_PER_CHAR + JSON_ENVELOPE_BYTES
}

/// Largest protobuf create or update body a note within `limits` can need
const fn max_protobuf_body_bytes(limits: &StoreLimits) -> usize {
    max_text_chars(limits) * UTF8_MAX_BYTES_PER_CHAR + PROTOBUF_ENVELOPE_BYTES
}

fn parse_in_range<T>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Display,
{
    let Some(raw) = optional_trimmed(lookup, name) else {
        return Ok(default);
    };
    let value = raw.parse::<T>().map_err(|_| {
        ConfigError::Invalid(format!(
            "{name} must be an integer in [{}, {}]",
            range.start(),
            range.end()
        ))
    })?;
    if !range.contains(&value) {
        return Err(ConfigError::Invalid(format!(
            "{name} must be in [{}, {}]",
            range.start(),
            range.end()
        )));
    }
    Ok(value)
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
