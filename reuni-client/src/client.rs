//! Typed operations against the configuration service

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::http::HttpRequest;
use crate::types::{
    ConfigurationMap, ConfigurationPayload, ConfigurationVersion, ErrorEnvelope, LatestVersion,
    Scope, SubmitOutcome, VersionList,
};

/// HTTP client for one configuration service, authenticated with one token.
pub struct ConfigurationClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ConfigurationClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn scope_url(&self, scope: &Scope) -> String {
        format!("{}/{}", self.base_url, scope.path())
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest::get(url, self.token.as_str())
    }

    /// Every version number stored for `scope`, as ordered by the server.
    pub async fn list_versions(&self, scope: &Scope) -> Result<Vec<i64>> {
        let url = format!("{}/versions", self.scope_url(scope));
        let list: VersionList = self.get(url).fetch_json(&self.http).await?;
        Ok(list.versions)
    }

    /// The newest version number the server holds for `scope`.
    pub async fn latest_version(&self, scope: &Scope) -> Result<i64> {
        let url = format!("{}/latest", self.scope_url(scope));
        let latest: LatestVersion = self.get(url).fetch_json(&self.http).await?;
        debug!(scope = %scope.path(), version = latest.version, "resolved latest version");
        Ok(latest.version)
    }

    pub async fn fetch_configuration(
        &self,
        scope: &Scope,
        version: i64,
    ) -> Result<ConfigurationVersion> {
        let url = format!("{}/{}", self.scope_url(scope), version);
        self.get(url).fetch_json(&self.http).await
    }

    /// Store `configuration` as a new version of `scope`.
    ///
    /// Only HTTP 201 counts as success; every other status is returned as
    /// [`SubmitOutcome::Rejected`] with the server's error envelope.
    pub async fn submit_configuration(
        &self,
        scope: &Scope,
        configuration: &ConfigurationMap,
    ) -> Result<SubmitOutcome> {
        let request = HttpRequest::post(self.scope_url(scope), self.token.as_str());
        let response = request
            .send_json(&self.http, &ConfigurationPayload { configuration })
            .await?;
        let status = response.status();
        if status == StatusCode::CREATED {
            info!(scope = %scope.path(), keys = configuration.len(), "configuration created");
            return Ok(SubmitOutcome::Created);
        }

        let body = response.bytes().await.map_err(|source| request.transport(source))?;
        let envelope: ErrorEnvelope =
            serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
                url: request.url.clone(),
                source,
            })?;
        let (status, message) = envelope.describe(status);
        Ok(SubmitOutcome::Rejected { status, message })
    }
}
