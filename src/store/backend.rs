use async_trait::async_trait;
use serde_json::Value;

use crate::models::{Event, Property};
use crate::store::errors::{Result, StoreError};
use crate::store::types::PropertyFilter;

/// Common trait for remote listing backends
/// This allows plugging in a hosted store (Supabase, Firebase, etc) behind
/// the same operations the local repository serves
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// Get the name of the backend provider
    fn provider_name(&self) -> &'static str;

    /// List properties matching the filter
    async fn list_properties(&self, _filter: &PropertyFilter) -> Result<Vec<Property>> {
        Err(StoreError::NotImplemented {
            op: "list_properties",
        })
    }

    /// Insert or fully replace a property
    async fn upsert_property(&self, _property: Property) -> Result<Property> {
        Err(StoreError::NotImplemented {
            op: "upsert_property",
        })
    }

    /// Record that a user saved a property
    async fn save_property_for_user(&self, _user_id: &str, _property_id: &str) -> Result<bool> {
        Err(StoreError::NotImplemented {
            op: "save_property_for_user",
        })
    }

    /// List the properties a user has saved
    async fn list_saved_for_user(&self, _user_id: &str) -> Result<Vec<Property>> {
        Err(StoreError::NotImplemented {
            op: "list_saved_for_user",
        })
    }

    /// Append an event to the activity log
    async fn log_event(&self, _payload: Value) -> Result<Event> {
        Err(StoreError::NotImplemented { op: "log_event" })
    }
}
