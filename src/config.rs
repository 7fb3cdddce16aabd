use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Runtime configuration for the data layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the JSON collection files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Optional cloud backend; absent or unrecognized means local-only
    #[serde(default, deserialize_with = "lenient_cloud")]
    pub cloud: Option<CloudConfig>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cloud: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load configuration from a JSON file, or fall back to defaults when
    /// the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Cloud backend selection, tagged by provider name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum CloudConfig {
    Supabase(SupabaseConfig),
    Firebase(FirebaseConfig),
}

/// Connection settings for a Supabase project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Connection settings for a Firebase project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub project_id: String,
    pub api_key: String,
}

// An unknown provider tag must select "no cloud backend" rather than fail
// the whole config load.
fn lenient_cloud<'de, D>(deserializer: D) -> Result<Option<CloudConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
