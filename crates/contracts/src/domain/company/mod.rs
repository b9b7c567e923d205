pub mod aggregate;
pub mod dataset;
pub mod pipeline;

pub use aggregate::{Company, Numeric};
pub use pipeline::{derive, FilterCriteria, SortDirection, SortKey, SortSpec};
