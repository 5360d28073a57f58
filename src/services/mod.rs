pub mod listing;
pub mod saved;
