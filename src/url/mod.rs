//! URL handling module
//!
//! This module provides link normalization, seed origin extraction, and the
//! scope filter that restricts which discovered links are crawled.

mod normalize;
mod origin;
mod scope;

// Re-export main types and functions
pub use normalize::normalize;
pub use origin::Origin;
pub use scope::ScopeFilter;
