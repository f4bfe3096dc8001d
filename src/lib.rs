pub mod types;
pub mod foundation;
pub mod stress;
pub mod soil;
pub mod settlement;
pub mod scenario;

pub use types::*;
