//! Forge registry client for published release lookups

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use tracing::warn;

use crate::remote::error::RemoteError;

/// Trait for looking up the current published release of a module
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseRegistry: Send + Sync {
    /// Returns the current published release version for `module`
    ///
    /// # Arguments
    /// * `module` - The declared module name (e.g., "acme/stdlib")
    async fn current_release(&self, module: &str) -> Result<String, RemoteError>;
}

/// Response from the forge modules API
#[derive(Debug, Deserialize)]
struct ModuleResponse {
    current_release: Release,
}

#[derive(Debug, Deserialize)]
struct Release {
    version: String,
}

/// HTTP client for a Forge-style registry API
pub struct ForgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl ForgeClient {
    /// Creates a new ForgeClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("modaudit/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ReleaseRegistry for ForgeClient {
    async fn current_release(&self, module: &str) -> Result<String, RemoteError> {
        // The API addresses modules as "owner-name", manifests declare them
        // as "owner/name".
        let slug = module.replace('/', "-");
        let url = format!("{}/v3/modules/{}", self.base_url, slug);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound(module.to_string()));
        }

        if !status.is_success() {
            warn!("Forge API returned status {}: {}", status, url);
            return Err(RemoteError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let module_info: ModuleResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse forge module response: {}", e);
            RemoteError::InvalidResponse(e.to_string())
        })?;

        Ok(module_info.current_release.version)
    }
}
