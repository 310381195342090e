mod summary;
pub mod views;

pub use summary::{summarize, Summary};
pub use views::{AllocationReport, AllocationView};
