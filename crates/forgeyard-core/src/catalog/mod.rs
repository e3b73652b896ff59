//! Manufacturer catalog: record types and the data-store boundary.

mod store;
mod types;

pub use store::{load_seed, ManufacturerStore, MemoryStore};
pub use types::{CapabilityEntry, ContactInfo, ManufacturerRecord, MatchRequest, NewManufacturer};
