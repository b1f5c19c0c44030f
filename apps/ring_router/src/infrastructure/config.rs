use std::env;

use hash_ring::{BuiltinHasher, DEFAULT_REPLICATION_FACTOR, MAX_VNODES_PER_NODE, RingConfig};

use crate::core::domain::models::AppError;

pub const REPLICATION_FACTOR_VAR: &str = "RING_REPLICATION_FACTOR";
pub const HASHER_VAR: &str = "RING_HASHER";
pub const BOOTSTRAP_VAR: &str = "RING_BOOTSTRAP";

/// A node registered before the router starts reading commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapNode {
    pub pool: String,
    pub node_id: String,
    pub weight: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    pub ring: RingConfig,
    pub bootstrap: Vec<BootstrapNode>,
}

impl RouterConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let replication_factor = match lookup(REPLICATION_FACTOR_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|rf| (1..=MAX_VNODES_PER_NODE).contains(rf))
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "{REPLICATION_FACTOR_VAR} must be between 1 and {MAX_VNODES_PER_NODE}, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_REPLICATION_FACTOR,
        };

        let hasher = match lookup(HASHER_VAR) {
            Some(raw) => raw
                .parse::<BuiltinHasher>()
                .map_err(|e| AppError::Config(format!("{HASHER_VAR}: {e}")))?,
            None => BuiltinHasher::default(),
        };

        let bootstrap = match lookup(BOOTSTRAP_VAR) {
            Some(raw) => parse_bootstrap(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            ring: RingConfig::new(replication_factor, hasher),
            bootstrap,
        })
    }
}

/// `pool/node[=weight]` entries separated by commas. Node ids may contain
/// `:` (host:port), hence `=` for the weight.
pub fn parse_bootstrap(raw: &str) -> Result<Vec<BootstrapNode>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_bootstrap_entry)
        .collect()
}

fn parse_bootstrap_entry(entry: &str) -> Result<BootstrapNode, AppError> {
    let invalid = || AppError::Config(format!("{BOOTSTRAP_VAR}: invalid entry {entry:?}"));

    let (pool, rest) = entry.split_once('/').ok_or_else(invalid)?;
    let (node_id, weight) = match rest.split_once('=') {
        Some((node_id, weight)) => {
            let weight = weight
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|w| *w > 0)
                .ok_or_else(invalid)?;
            (node_id, weight)
        }
        None => (rest, 1),
    };

    let (pool, node_id) = (pool.trim(), node_id.trim());
    if pool.is_empty() || node_id.is_empty() {
        return Err(invalid());
    }

    Ok(BootstrapNode {
        pool: pool.to_string(),
        node_id: node_id.to_string(),
        weight,
    })
}
