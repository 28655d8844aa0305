//! I/O collaborators for the audit core
//!
//! - [`forge`]: HTTP client for the forge registry's published releases
//! - [`git`]: remote ref listing via `git ls-remote`
//! - [`error`]: shared remote error type
//!
//! These are the only blocking points of the tool; the audit core stays
//! synchronous and unit-testable behind the two traits exported here.

pub mod error;
pub mod forge;
pub mod git;
