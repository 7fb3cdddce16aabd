use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{price_to_numeric, Event, Property, Role, User};
use crate::store::adapter::JsonFileStore;
use crate::store::errors::{Result, StoreError};
use crate::store::types::PropertyFilter;

/// Storage keys, one per collection
const KEY_PROPERTIES: &str = "rs_properties";
const KEY_USERS: &str = "rs_users";
const KEY_SAVED_BY_USER: &str = "rs_saved_by_user";
const KEY_EVENTS: &str = "rs_events";

/// Event log retention bound; oldest entries are evicted first
const MAX_EVENTS: usize = 1000;

/// In-memory repository hydrated from the persistent store
///
/// All four collections are loaded once at construction; every mutation
/// re-serializes the whole collection it touched back to the store, so a
/// read immediately after a write always observes that write within this
/// process. Concurrent writers sharing the same directory race with
/// last-full-write-wins semantics.
pub struct LocalRepository {
    store: JsonFileStore,
    properties: Vec<Property>,
    users: Vec<User>,
    saved_by_user: HashMap<String, Vec<String>>,
    events: Vec<Event>,
}

impl LocalRepository {
    /// Build a repository over the given store, hydrating every collection
    ///
    /// A collection that fails to load (missing, unreadable, or malformed)
    /// starts empty rather than failing construction.
    pub fn open(store: JsonFileStore) -> Self {
        let properties = load_collection(&store, KEY_PROPERTIES);
        let users = load_collection(&store, KEY_USERS);
        let saved_by_user = match store.read(KEY_SAVED_BY_USER) {
            Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
                warn!("Malformed saved-property data, starting empty: {}", err);
                HashMap::new()
            }),
            Ok(None) => HashMap::new(),
            Err(err) => {
                warn!("Failed to load '{}', starting empty: {}", KEY_SAVED_BY_USER, err);
                HashMap::new()
            }
        };
        let events = load_collection(&store, KEY_EVENTS);

        debug!(
            "Hydrated repository: {} properties, {} users, {} events",
            properties.len(),
            users.len(),
            events.len()
        );

        Self {
            store,
            properties,
            users,
            saved_by_user,
            events,
        }
    }

    /// Number of stored properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// List properties matching the filter, in insertion order
    pub fn list_properties(&self, filter: &PropertyFilter) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect()
    }

    /// Insert or fully replace a property
    ///
    /// An empty id gets a generated one; `price_numeric` is re-derived
    /// from the display price on every write. The stored record is
    /// returned.
    pub fn upsert_property(&mut self, mut property: Property) -> Result<Property> {
        if property.id.is_empty() {
            property.id = Uuid::new_v4().to_string();
        }
        property.price_numeric = price_to_numeric(&property.price);

        match self.properties.iter_mut().find(|p| p.id == property.id) {
            Some(slot) => *slot = property.clone(),
            None => self.properties.push(property.clone()),
        }
        self.persist_properties()?;
        Ok(property)
    }

    /// Record that a user saved a property; idempotent
    ///
    /// The property id is not checked against the property collection, so
    /// an association may outlive its listing.
    pub fn save_property_for_user(&mut self, user_id: &str, property_id: &str) -> Result<bool> {
        let saved = self.saved_by_user.entry(user_id.to_string()).or_default();
        if !saved.iter().any(|id| id == property_id) {
            saved.push(property_id.to_string());
        }
        self.persist_saved()?;
        Ok(true)
    }

    /// List the stored properties a user has saved
    ///
    /// Ids with no matching property are silently omitted.
    pub fn list_saved_for_user(&self, user_id: &str) -> Vec<Property> {
        let Some(ids) = self.saved_by_user.get(user_id) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| self.properties.iter().find(|p| &p.id == id))
            .cloned()
            .collect()
    }

    /// Insert or fully replace a user
    pub fn upsert_user(&mut self, mut user: User) -> Result<User> {
        if user.id.is_empty() {
            user.id = Uuid::new_v4().to_string();
        }
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user.clone(),
            None => self.users.push(user.clone()),
        }
        self.persist_users()?;
        Ok(user)
    }

    /// Register a new user, rejecting emails that are already taken
    pub fn register_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User> {
        if self.find_user_by_email(email).is_some() {
            return Err(StoreError::EmailTaken {
                email: email.to_string(),
            });
        }
        self.upsert_user(User {
            id: String::new(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            created_at: Utc::now(),
        })
    }

    /// Look up a user by email, compared case-insensitively
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Append an event to the log, enforcing the retention bound
    ///
    /// Non-object payloads are wrapped under a `data` key so the stored
    /// record stays a flat object.
    pub fn log_event(&mut self, payload: Value) -> Result<Event> {
        let payload = match payload {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        let event = Event {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now(),
            payload,
        };
        self.events.push(event.clone());
        if self.events.len() > MAX_EVENTS {
            let excess = self.events.len() - MAX_EVENTS;
            self.events.drain(..excess);
        }
        self.persist_events()?;
        Ok(event)
    }

    /// Stored events, oldest first
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn persist_properties(&self) -> Result<()> {
        self.store
            .write(KEY_PROPERTIES, &to_value(KEY_PROPERTIES, &self.properties)?)
    }

    fn persist_users(&self) -> Result<()> {
        self.store.write(KEY_USERS, &to_value(KEY_USERS, &self.users)?)
    }

    fn persist_saved(&self) -> Result<()> {
        self.store
            .write(KEY_SAVED_BY_USER, &to_value(KEY_SAVED_BY_USER, &self.saved_by_user)?)
    }

    fn persist_events(&self) -> Result<()> {
        self.store.write(KEY_EVENTS, &to_value(KEY_EVENTS, &self.events)?)
    }
}

fn to_value<T: serde::Serialize>(key: &str, collection: &T) -> Result<Value> {
    serde_json::to_value(collection).map_err(|source| StoreError::Malformed {
        key: key.to_string(),
        source,
    })
}

fn load_collection<T: serde::de::DeserializeOwned>(store: &JsonFileStore, key: &str) -> Vec<T> {
    match store.read(key) {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!("Malformed data under '{}', starting empty: {}", key, err);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!("Failed to load '{}', starting empty: {}", key, err);
            Vec::new()
        }
    }
}

fn matches_filter(property: &Property, filter: &PropertyFilter) -> bool {
    if let Some(county) = &filter.county {
        let in_county = property.address.county.as_deref() == Some(county.as_str())
            || property.address.region.as_deref() == Some(county.as_str());
        if !in_county {
            return false;
        }
    }
    if let Some(min) = filter.min_price {
        if property.price_numeric < min {
            return false;
        }
    }
    if let Some(max) = filter.max_price {
        if property.price_numeric > max {
            return false;
        }
    }
    if let Some(bedrooms) = filter.bedrooms {
        if property.bedrooms < bedrooms {
            return false;
        }
    }
    true
}
