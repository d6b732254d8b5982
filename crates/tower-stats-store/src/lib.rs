//! Append-only, JSON-backed history of parsed Tower sessions

mod config;
mod error;
mod io;
mod report;
mod store;

pub use config::{StoreConfig, DEFAULT_DATA_FILE};
pub use error::{StoreError, StoreResult};
pub use report::{ComparedSession, Comparison, SessionListing, SessionSummary};
pub use store::SessionStore;
