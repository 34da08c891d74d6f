pub mod config;
pub mod console;
pub mod controller;
pub mod datastore;
pub mod log;
pub mod model;
pub mod service;

pub use controller::{ControllerError, FetchController, FetchHandle};
pub use datastore::{DataStoreError, ItemDataStore, ListStore};
pub use model::{FetchState, Filter, FilterCounts, Item, ItemId, Phase, RequestId};

#[cfg(all(test, feature = "e2e"))]
mod e2e_tests;
