//! Partitioning of point clouds against validation regions.

pub use self::classification::Classification;
pub use self::classify::{classify, is_accepted};
pub use self::classify_error::ClassifyError;

mod classification;
mod classify;
mod classify_error;
