use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use business::domain::recommendation::model::AffinityTable;

use super::{Lookup, env_lookup};

/// Storefront catalog used when no affinity file is configured.
const DEFAULT_CATALOG: [&str; 9] = [
    "OLJCESPC7Z", // Sunglasses
    "66VCHSJNUP", // Tank Top
    "1YMWWN1N4O", // Watch
    "L9ECAV7KIM", // Loafers
    "2ZYFJ3GM2N", // Hairdryer
    "0PUK6V6EV0", // Candle Holder
    "LS4PSXUNUM", // Salt & Pepper Shakers
    "9SIQT8TOJO", // Bamboo Glass Jar
    "6E92ZMYYFZ", // Mug
];

const DEFAULT_AFFINITIES: [(&str, [&str; 2]); 9] = [
    ("OLJCESPC7Z", ["1YMWWN1N4O", "66VCHSJNUP"]),
    ("66VCHSJNUP", ["OLJCESPC7Z", "L9ECAV7KIM"]),
    ("1YMWWN1N4O", ["OLJCESPC7Z", "L9ECAV7KIM"]),
    ("L9ECAV7KIM", ["1YMWWN1N4O", "66VCHSJNUP"]),
    ("2ZYFJ3GM2N", ["0PUK6V6EV0", "6E92ZMYYFZ"]),
    ("0PUK6V6EV0", ["LS4PSXUNUM", "9SIQT8TOJO"]),
    ("LS4PSXUNUM", ["9SIQT8TOJO", "6E92ZMYYFZ"]),
    ("9SIQT8TOJO", ["LS4PSXUNUM", "6E92ZMYYFZ"]),
    ("6E92ZMYYFZ", ["9SIQT8TOJO", "LS4PSXUNUM"]),
];

/// On-disk layout of an affinity table.
#[derive(Debug, Deserialize)]
struct AffinityTableFile {
    catalog: Vec<String>,
    #[serde(default)]
    affinities: HashMap<String, Vec<String>>,
}

/// Configuration of the recommendation service.
#[derive(Debug, Clone, Default)]
pub struct RecommendationConfig {
    pub affinity_table_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl RecommendationConfig {
    /// Load recommendation configuration from environment variables
    ///
    /// Environment variables:
    /// - AFFINITY_TABLE_PATH: JSON file with `catalog` and `affinities` (default: built-in table)
    /// - RECOMMENDATION_SEED: seed for reproducible sampling (default: thread RNG)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> anyhow::Result<Self> {
        let seed = match lookup("RECOMMENDATION_SEED") {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("RECOMMENDATION_SEED must be an integer, got {:?}", raw))?,
            ),
            None => None,
        };

        Ok(Self {
            affinity_table_path: lookup("AFFINITY_TABLE_PATH").map(PathBuf::from),
            seed,
        })
    }

    /// Builds the affinity table once at start-up.
    pub fn load_affinity_table(&self) -> anyhow::Result<AffinityTable> {
        match &self.affinity_table_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read affinity table {}", path.display()))?;
                parse_affinity_table(&raw)
                    .with_context(|| format!("invalid affinity table {}", path.display()))
            }
            None => default_affinity_table(),
        }
    }
}

pub fn default_affinity_table() -> anyhow::Result<AffinityTable> {
    let catalog = DEFAULT_CATALOG.iter().map(|id| id.to_string());
    let affinities = DEFAULT_AFFINITIES
        .iter()
        .map(|(key, related)| (key.to_string(), related.map(String::from)));
    Ok(AffinityTable::new(catalog, affinities)?)
}

fn parse_affinity_table(raw: &str) -> anyhow::Result<AffinityTable> {
    let file: AffinityTableFile = serde_json::from_str(raw)?;
    Ok(AffinityTable::new(file.catalog, file.affinities)?)
}
