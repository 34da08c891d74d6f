mod datastore;
mod error;

pub use datastore::ItemDataStore;
pub use datastore::ListStore;
pub use error::DataStoreError;
