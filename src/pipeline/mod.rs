//! Pipeline module - the cleaning stages

pub mod dataset;
pub mod impute;
pub mod inspect;
pub mod loader;
pub mod missing;
pub mod outliers;
pub mod plan;
pub mod project;
pub mod save;
pub mod schema;

pub use dataset::*;
pub use impute::*;
pub use inspect::*;
pub use loader::*;
pub use missing::*;
pub use outliers::*;
pub use plan::*;
pub use project::*;
pub use save::*;
pub use schema::*;
