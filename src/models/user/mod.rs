pub mod filter;
pub mod types;

pub use filter::DedupRule;
pub use types::*;
