pub mod aggregate;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod sort;

pub use aggregate::ContactAggregator;
pub use domain::*;
pub use error::CoreError;
pub use pipeline::{aggregate_rows, run_pipeline, PipelineOutput, RunReport};
pub use sort::{sort_contacts, SortPolicy};
