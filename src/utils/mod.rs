//! Console helpers - styling and spinners

pub mod progress;
pub mod styling;

pub use progress::*;
pub use styling::*;
