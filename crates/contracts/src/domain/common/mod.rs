//! Common types and traits for all records served by the inventory API

pub mod aggregate_id;
pub mod nullable;

// Re-exports
pub use aggregate_id::AggregateId;
pub use nullable::{lenient_f64, lenient_f64_or_zero, null_as_default};
