use std::sync::Mutex;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::{Event, Property, Role, User};
use crate::store::adapter::JsonFileStore;
use crate::store::backend::RemoteBackend;
use crate::store::errors::{Result, StoreError};
use crate::store::providers::resolve_backend;
use crate::store::repository::LocalRepository;
use crate::store::seed;
use crate::store::types::PropertyFilter;

/// Callback invoked whenever a remote backend call fails and the service
/// falls back to the local repository; receives the operation name and
/// the backend error
pub type FallbackObserver = Box<dyn Fn(&str, &StoreError) + Send + Sync>;

/// Entry point for all data access
///
/// Each operation is tried against the remote backend when one is
/// configured; any backend failure is reported to the fallback observer
/// and the call is served from the local repository instead, so callers
/// never see a backend error. Construct one instance at application start
/// and pass it by reference to consumers.
pub struct DataService {
    local: Mutex<LocalRepository>,
    cloud: Option<Box<dyn RemoteBackend>>,
    on_fallback: FallbackObserver,
}

impl DataService {
    /// Build the service from configuration
    ///
    /// Opens the persistent store, hydrates the local repository, seeds
    /// the demonstration listings into an empty store, and wires the
    /// cloud backend when one is configured. A backend that fails to
    /// construct is dropped with a warning rather than failing startup.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = JsonFileStore::open(&config.data_dir)?;
        let mut local = LocalRepository::open(store);
        seed::seed_if_empty(&mut local)?;

        let cloud = match &config.cloud {
            Some(cloud_config) => match resolve_backend(cloud_config) {
                Ok(backend) => {
                    info!("Using '{}' as remote backend", backend.provider_name());
                    Some(backend)
                }
                Err(err) => {
                    warn!("Dropping remote backend, construction failed: {}", err);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            local: Mutex::new(local),
            cloud,
            on_fallback: Box::new(|operation, err| {
                warn!(
                    "Remote backend failed during '{}', serving from local repository: {}",
                    operation, err
                );
            }),
        })
    }

    /// Use the given backend in place of whatever the configuration
    /// resolved
    pub fn with_remote_backend(mut self, backend: Box<dyn RemoteBackend>) -> Self {
        self.cloud = Some(backend);
        self
    }

    /// Replace the fallback observer
    pub fn with_fallback_observer(
        mut self,
        observer: impl Fn(&str, &StoreError) + Send + Sync + 'static,
    ) -> Self {
        self.on_fallback = Box::new(observer);
        self
    }

    /// Whether a remote backend is configured
    pub fn has_remote_backend(&self) -> bool {
        self.cloud.is_some()
    }

    /// List properties matching the filter
    pub async fn get_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>> {
        if let Some(cloud) = &self.cloud {
            match cloud.list_properties(filter).await {
                Ok(properties) => return Ok(properties),
                Err(err) => (self.on_fallback)("get_properties", &err),
            }
        }
        Ok(self.local().list_properties(filter))
    }

    /// Insert or fully replace a property, returning the stored record
    pub async fn add_or_update_property(&self, property: Property) -> Result<Property> {
        if let Some(cloud) = &self.cloud {
            match cloud.upsert_property(property.clone()).await {
                Ok(stored) => return Ok(stored),
                Err(err) => (self.on_fallback)("add_or_update_property", &err),
            }
        }
        self.local().upsert_property(property)
    }

    /// Record that a user saved a property; idempotent
    pub async fn save_property_for_user(&self, user_id: &str, property_id: &str) -> Result<bool> {
        if let Some(cloud) = &self.cloud {
            match cloud.save_property_for_user(user_id, property_id).await {
                Ok(saved) => return Ok(saved),
                Err(err) => (self.on_fallback)("save_property_for_user", &err),
            }
        }
        self.local().save_property_for_user(user_id, property_id)
    }

    /// List the properties a user has saved
    pub async fn list_saved_for_user(&self, user_id: &str) -> Result<Vec<Property>> {
        if let Some(cloud) = &self.cloud {
            match cloud.list_saved_for_user(user_id).await {
                Ok(properties) => return Ok(properties),
                Err(err) => (self.on_fallback)("list_saved_for_user", &err),
            }
        }
        Ok(self.local().list_saved_for_user(user_id))
    }

    /// Append an event to the activity log
    pub async fn log_event(&self, payload: Value) -> Result<Event> {
        if let Some(cloud) = &self.cloud {
            match cloud.log_event(payload.clone()).await {
                Ok(event) => return Ok(event),
                Err(err) => (self.on_fallback)("log_event", &err),
            }
        }
        self.local().log_event(payload)
    }

    /// Insert or fully replace a user; local-only
    pub async fn upsert_user(&self, user: User) -> Result<User> {
        self.local().upsert_user(user)
    }

    /// Register a new user, rejecting duplicate emails; local-only
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User> {
        self.local().register_user(name, email, password, role)
    }

    /// Look up a user by email, compared case-insensitively; local-only
    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.local().find_user_by_email(email).cloned()
    }

    fn local(&self) -> std::sync::MutexGuard<'_, LocalRepository> {
        self.local.lock().expect("local repository lock poisoned")
    }
}
