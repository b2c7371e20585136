//! Report module - profiles, cleaning summary and JSON export

pub mod export;
pub mod profile;
pub mod summary;

pub use export::*;
pub use summary::*;
