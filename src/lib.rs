//! modaudit audits declared module dependencies against the latest
//! available upstream versions and reports which are outdated.
//!
//! Dependencies come from a TOML manifest and fall into two kinds: registry
//! modules, compared against the forge's current published release, and Git
//! modules, whose declared ref is classified (branch / tag / commit hash)
//! and compared against the remote's latest tag or head commit. The tool
//! only computes and reports the diff; it never installs or upgrades
//! anything.

pub mod audit;
pub mod config;
pub mod manifest;
pub mod remote;
