use thiserror::Error;

use crate::remote::error::RemoteError;

/// Hard per-dependency errors surfaced by the audit driver.
///
/// These never abort the run; the driver aggregates them and keeps checking
/// the remaining dependencies.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("unable to determine ref type for {0}")]
    UnresolvableRef(String),

    #[error("failed to query registry for {name}: {source}")]
    Registry {
        name: String,
        #[source]
        source: RemoteError,
    },

    #[error("failed to list remote refs for {name}: {source}")]
    GitRemote {
        name: String,
        #[source]
        source: RemoteError,
    },
}

impl AuditError {
    /// Name of the dependency the error belongs to.
    pub fn dependency(&self) -> &str {
        match self {
            Self::UnresolvableRef(name) => name,
            Self::Registry { name, .. } | Self::GitRemote { name, .. } => name,
        }
    }
}
