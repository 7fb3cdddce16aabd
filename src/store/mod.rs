pub mod adapter;
pub mod backend;
pub mod errors;
pub mod providers;
pub mod repository;
pub mod seed;
pub mod service;
pub mod types;

pub use adapter::JsonFileStore;
pub use backend::RemoteBackend;
pub use errors::{Result, StoreError};
pub use providers::resolve_backend;
pub use repository::LocalRepository;
pub use service::DataService;
pub use types::PropertyFilter;
