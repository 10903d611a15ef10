pub mod filter;

pub use filter::{DEFAULT_FILTER_LIMIT, Searchable, filter_records, filter_with_limit};
