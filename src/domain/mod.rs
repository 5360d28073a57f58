pub mod countdown;
pub mod error;
pub mod filter;
pub mod hackathon;
pub mod presentation;

pub use countdown::*;
pub use error::*;
pub use filter::*;
pub use hackathon::*;
pub use presentation::*;
