pub mod config;
pub mod models;
pub mod store;

pub use config::{AppConfig, CloudConfig, FirebaseConfig, SupabaseConfig};
pub use models::{Address, Event, GeoPoint, Property, Role, User};
pub use store::{
    DataService, JsonFileStore, LocalRepository, PropertyFilter, RemoteBackend, Result, StoreError,
};
