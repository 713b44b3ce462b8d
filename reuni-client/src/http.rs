//! Single-request HTTP helper shared by every service call.
//!
//! A request never retries and never interprets the status code; callers
//! decide what a status means.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::ErrorEnvelope;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: Method,
    /// Bearer token, sent as `Authorization: Bearer <token>`
    pub authorization: String,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self::new(Method::GET, url, authorization)
    }

    pub fn post(url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self::new(Method::POST, url, authorization)
    }

    fn new(method: Method, url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            authorization: authorization.into(),
        }
    }

    fn builder(&self, client: &Client) -> RequestBuilder {
        client
            .request(self.method.clone(), &self.url)
            .bearer_auth(&self.authorization)
    }

    /// Send the request without a body and hand back the raw response.
    pub async fn send(&self, client: &Client) -> Result<Response> {
        self.dispatch(self.builder(client)).await
    }

    /// Send `body` as JSON and hand back the raw response.
    pub async fn send_json<B>(&self, client: &Client, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(self.builder(client).json(body)).await
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response> {
        debug!(method = %self.method, url = %self.url, "sending request");
        let response = builder.send().await.map_err(|source| self.transport(source))?;
        debug!(status = %response.status(), url = %self.url, "received response");
        Ok(response)
    }

    /// Send the request and decode a JSON body into `T`.
    ///
    /// A non-success status is reported as [`ClientError::Server`] built from
    /// the service's error envelope, so a 404 never masquerades as a decode
    /// failure.
    pub async fn fetch_json<T: DeserializeOwned>(&self, client: &Client) -> Result<T> {
        let response = self.send(client).await?;
        let status = response.status();
        let body = response.bytes().await.map_err(|source| self.transport(source))?;

        if !status.is_success() {
            let envelope: ErrorEnvelope = serde_json::from_slice(&body).unwrap_or_default();
            let (status, message) = envelope.describe(status);
            return Err(ClientError::Server { status, message });
        }

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            url: self.url.clone(),
            source,
        })
    }

    pub fn transport(&self, source: reqwest::Error) -> ClientError {
        ClientError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}
