pub mod influence;
pub mod grid;

pub use influence::*;
pub use grid::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StressError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
