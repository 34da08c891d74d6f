pub mod error;
pub mod fetch_state;
pub mod filter;
pub mod item;
pub mod request_id;

pub use fetch_state::{FetchState, Phase};
pub use filter::{Filter, FilterCounts};
pub use item::{Item, ItemId};
pub use request_id::RequestId;
