pub mod json_file;
pub mod json_store;
pub mod memory_store;
pub mod store;

pub use json_store::JsonStore;
pub use memory_store::MemoryStore;
pub use store::{HackathonStore, SavedSet};
