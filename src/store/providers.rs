use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::config::{CloudConfig, FirebaseConfig, SupabaseConfig};
use crate::store::backend::RemoteBackend;
use crate::store::errors::{Result, StoreError};

/// Resolve a cloud config into a concrete backend instance
pub fn resolve_backend(config: &CloudConfig) -> Result<Box<dyn RemoteBackend>> {
    match config {
        CloudConfig::Supabase(supabase) => Ok(Box::new(SupabaseBackend::new(supabase.clone())?)),
        CloudConfig::Firebase(firebase) => Ok(Box::new(FirebaseBackend::new(firebase.clone())?)),
    }
}

fn http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|err| StoreError::BackendUnavailable {
            provider: provider.to_string(),
            message: format!("Failed to create HTTP client: {err}"),
        })
}

/// Supabase-hosted backend
///
/// Holds the wiring (client plus project credentials); the repository
/// operations themselves are not wired up yet and fail with the trait's
/// not-implemented defaults, which the data service treats as a fallback
/// trigger.
pub struct SupabaseBackend {
    #[allow(dead_code)]
    client: Client,
    #[allow(dead_code)]
    config: SupabaseConfig,
}

impl SupabaseBackend {
    pub fn new(config: SupabaseConfig) -> Result<Self> {
        info!("Configuring Supabase backend at {}", config.url);
        let client = http_client("supabase")?;
        Ok(Self { client, config })
    }
}

impl RemoteBackend for SupabaseBackend {
    fn provider_name(&self) -> &'static str {
        "supabase"
    }
}

/// Firebase-hosted backend; same status as [`SupabaseBackend`]
pub struct FirebaseBackend {
    #[allow(dead_code)]
    client: Client,
    #[allow(dead_code)]
    config: FirebaseConfig,
}

impl FirebaseBackend {
    pub fn new(config: FirebaseConfig) -> Result<Self> {
        info!("Configuring Firebase backend for {}", config.project_id);
        let client = http_client("firebase")?;
        Ok(Self { client, config })
    }
}

impl RemoteBackend for FirebaseBackend {
    fn provider_name(&self) -> &'static str {
        "firebase"
    }
}
