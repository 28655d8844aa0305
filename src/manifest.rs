//! Dependency manifest loading
//!
//! The manifest is a TOML file declaring the audited dependencies:
//!
//! ```toml
//! forge = "https://forgeapi.example.com"
//!
//! [registry]
//! "acme/stdlib" = "9.4.0"
//!
//! [git.consul]
//! url = "https://github.com/acme/consul.git"
//! ref = "v1.0.0"
//! ```
//!
//! Registry entries map a module name to its installed version. Git entries
//! carry a remote URL and an optional declared ref; a missing `ref` means the
//! dependency tracks the remote head and is skipped by the audit. Entry order
//! is preserved so report output is reproducible.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where a dependency comes from, and the declared state to audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Published on the forge registry with this installed version.
    Registry { installed: String },
    /// Fetched from a Git remote, optionally pinned to a ref.
    Git { url: String, reference: Option<String> },
}

/// One declared module dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub source: Source,
}

/// The parsed dependency manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Optional forge base URL override.
    pub forge: Option<String>,
    /// Declared dependencies, registry entries first, in file order.
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    forge: Option<String>,
    #[serde(default)]
    registry: IndexMap<String, String>,
    #[serde(default)]
    git: IndexMap<String, RawGitDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGitDependency {
    url: String,
    #[serde(rename = "ref")]
    reference: Option<String>,
}

impl Manifest {
    /// Parses manifest text.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = toml::from_str(text)?;

        let registry = raw.registry.into_iter().map(|(name, installed)| Dependency {
            name,
            source: Source::Registry { installed },
        });
        let git = raw.git.into_iter().map(|(name, dep)| Dependency {
            name,
            source: Source::Git {
                url: dep.url,
                reference: dep.reference,
            },
        });

        Ok(Self {
            forge: raw.forge,
            dependencies: registry.chain(git).collect(),
        })
    }

    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }
}
