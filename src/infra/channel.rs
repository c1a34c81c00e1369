//! Channel archive-index client
//!
//! Fetches the per-platform index of already-built artifacts from a
//! channel URL. Failures surface immediately; the core performs no
//! retry.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::defaults::REPODATA_FILE;
use crate::core::archive::ArchiveIndex;
use crate::error::ChannelError;

/// Archive index document served by a channel
#[derive(Debug, Deserialize)]
struct RepoData {
    /// Canonical artifact filename to artifact metadata
    #[serde(default)]
    packages: HashMap<String, serde_json::Value>,
}

/// Client for fetching channel archive indices
#[derive(Debug, Default)]
pub struct ChannelClient {
    client: reqwest::Client,
}

impl ChannelClient {
    /// Create a new channel client
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the archive index below `channel_platform_url`.
    ///
    /// Only the artifact filenames are kept; the per-artifact metadata
    /// is not interpreted.
    pub async fn fetch_archive_index(
        &self,
        channel_platform_url: &str,
    ) -> Result<ArchiveIndex, ChannelError> {
        let url = format!(
            "{}/{REPODATA_FILE}",
            channel_platform_url.trim_end_matches('/')
        );
        tracing::debug!("fetching archive index from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ChannelError::Network {
                url: url.clone(),
                error: e.to_string(),
            })?;
        if !response.status().is_success() {
            return Err(ChannelError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let data: RepoData = response.json().await.map_err(|e| ChannelError::Parse {
            url: url.clone(),
            error: e.to_string(),
        })?;
        Ok(ArchiveIndex::from_names(data.packages.into_keys()))
    }
}
