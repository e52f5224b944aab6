//! Request extractors.

pub mod query;
pub mod target;

pub use query::FetchQuery;
pub use target::FetchTarget;
