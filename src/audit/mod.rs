//! Outdated-dependency resolution core
//!
//! This module decides what "latest" means for a Git remote and whether a
//! declared reference is outdated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Formats   │────▶│   Resolver  │◀────│  Classifier │
//! │ (strategies)│     │  (latest)   │     │ (ref kind)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Checker   │
//!                                         │  (driver)   │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`formats`]: registration-ordered version-format strategies ("semver" built in)
//! - [`resolver`]: latest-ref resolution with the undetermined sentinel
//! - [`classifier`]: branch / tag / commit-hash classification of declared refs
//! - [`checker`]: the audit driver producing findings and per-dependency errors
//! - [`error`]: audit error types
//!
//! Everything here is pure and performs no I/O; the checker is handed its
//! collaborators from [`crate::remote`].

pub mod checker;
pub mod classifier;
pub mod error;
pub mod formats;
pub mod resolver;
