//! The accounts API client.
//!
//! A [`Client`] is cheap to clone (configuration behind an `Arc`, reqwest's
//! pooled client) and safe to share across concurrent requests. All
//! operations start from one of the builder factories and end in a
//! [`crate::Dispatch`].

use chrono::Utc;
use reqwest::header::{ACCEPT, DATE, HOST};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crestbank_types::RecordId;

use crate::config::{Config, ConfigError};
use crate::create::CreateBuilder;
use crate::delete::DeleteBuilder;
use crate::error::ApiError;
use crate::fetch::FetchBuilder;
use crate::list::{ListBuilder, Paginator};
use crate::payload::PageLinks;

/// Path of the accounts collection under the API base URL.
pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";

const ACCEPT_JSON_API: &str = "application/vnd.api+json";

/// Async client for the accounts API.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<Config>,
    accounts_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Build a client from an explicit configuration.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let accounts_url =
            config
                .base_url
                .join(ACCOUNTS_PATH)
                .map_err(|err| ConfigError::InvalidBaseUrl {
                    value: config.base_url.to_string(),
                    reason: err.to_string(),
                })?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config: Arc::new(config),
            accounts_url,
            http,
        })
    }

    /// Build a client from [`Config::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start building an account create request.
    pub fn create_account(&self) -> CreateBuilder {
        CreateBuilder::new(self.clone())
    }

    /// Start building an account fetch request.
    pub fn fetch_account(&self) -> FetchBuilder {
        FetchBuilder::new(self.clone())
    }

    /// Start building an account list request.
    pub fn list_accounts(&self) -> ListBuilder {
        ListBuilder::new(self.clone())
    }

    /// Start building an account delete request.
    pub fn delete_account(&self) -> DeleteBuilder {
        DeleteBuilder::new(self.clone())
    }

    /// Traverse a previously fetched page via its links.
    pub fn paginate(&self, links: &PageLinks) -> Paginator {
        Paginator::new(self.clone(), links.clone())
    }

    pub(crate) fn accounts_url(&self) -> Url {
        self.accounts_url.clone()
    }

    pub(crate) fn account_url(&self, id: &RecordId) -> Url {
        let mut url = self.accounts_url();
        // the base is validated host-bearing at construction, so the path
        // is always segmentable; the id is percent-encoded by the push
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
        }
        url
    }

    pub(crate) fn join_link(&self, link: &str) -> Result<Url, ApiError> {
        self.config
            .base_url
            .join(link)
            .map_err(|_| ApiError::InvalidLink {
                link: link.to_owned(),
            })
    }

    /// Send a request with the mandatory headers and map non-2xx responses
    /// into the error taxonomy.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .header(HOST, self.host_header())
            .header(DATE, http_date_now())
            .header(ACCEPT, ACCEPT_JSON_API)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "accounts API returned an error status");
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.send(self.http.get(url)).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn post_json<T, B>(&self, url: Url, body: B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        tracing::debug!(%url, "POST");
        let response = self.send(self.http.post(url).json(&body)).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn delete_empty(&self, url: Url) -> Result<(), ApiError> {
        tracing::debug!(%url, "DELETE");
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    fn host_header(&self) -> String {
        let host = self.config.base_url.host_str().unwrap_or_default();
        match self.config.base_url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        }
    }
}

/// Current time in the RFC 1123 shape HTTP `Date` headers use.
fn http_date_now() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(Config::new("http://localhost:8080").unwrap()).unwrap()
    }

    #[test]
    fn test_accounts_url() {
        assert_eq!(
            client().accounts_url().as_str(),
            "http://localhost:8080/v1/organisation/accounts"
        );
    }

    #[test]
    fn test_account_url_percent_encodes_the_id() {
        let url = client().account_url(&RecordId::from("not a/uuid?"));
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/organisation/accounts/not%20a%2Fuuid%3F"
        );
    }

    #[test]
    fn test_join_link_resolves_against_base() {
        let url = client()
            .join_link("/v1/organisation/accounts?page%5Bnumber%5D=1")
            .unwrap();
        assert!(url.as_str().starts_with("http://localhost:8080/v1/"));
    }

    #[test]
    fn test_host_header_includes_port() {
        assert_eq!(client().host_header(), "localhost:8080");

        let no_port = Client::new(Config::new("http://api.example.com").unwrap()).unwrap();
        assert_eq!(no_port.host_header(), "api.example.com");
    }

    #[test]
    fn test_http_date_shape() {
        let date = http_date_now();
        assert!(date.ends_with(" GMT"));
        // e.g. "Fri, 07 Aug 2026 12:00:00 GMT"
        assert_eq!(date.len(), 29);
        assert_eq!(&date[3..5], ", ");
    }
}
