//! minitrack core library
//!
//! Record store, validation and statistics for a miniature painting
//! tracker. The collection is a single document of armies, each an ordered
//! map of unit groups, persisted whole after every mutation.

pub mod collection;
pub mod error;
pub mod models;
pub mod registry;
pub mod stats;
pub mod store;
pub mod units;
pub mod validation;

pub use collection::Collection;
pub use error::{CollectionError, Result, StoreError, ValidationError};
pub use models::{Army, Document, Status, Unit, UnitEntry, UnitStatus};
pub use registry::{create_army, list_armies, select_army};
pub use stats::{compute, ArmyStats, StatusCounts};
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
pub use units::{
    delete_unit, update_status, upsert_unit, StatusChange, StatusOnUpdate, UnitForm,
    UpsertOutcome,
};
pub use validation::parse_miniatures_number;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
