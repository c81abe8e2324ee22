//! Listings REST API client.
//!
//! Fetches properties, bookings, blocks and pricing rules as JSON and
//! normalizes them through the adapters in [`super::dto`]. Requests carry a
//! bearer token; a 401 triggers one token refresh and one replay of the
//! request, and a second 401 is returned as [`ApiError::Unauthorized`].
//! Paginated collections are followed through their `next` links.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{
    normalize_for, RawBlock, RawBooking, RawList, RawPricingRule, RawProperty, RefreshResponse,
};
use super::token::TokenStore;
use crate::availability::AvailabilitySource;
use crate::config::{ApiConfig, Credentials};
use crate::domain::{BlockRecord, BookingRecord, PricingRule, Property, PropertyId};
use crate::error::{ApiError, Result};

/// Upper bound on pages followed for one collection.
const MAX_PAGES: u32 = 500;

/// HTTP client for the listings API.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    refresh_url: Url,
    tokens: Arc<TokenStore>,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a client from configuration and runtime credentials.
    pub fn new(config: &ApiConfig, credentials: &Credentials) -> Result<Self> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        let refresh_url = base_url.join(config.refresh_path.trim_start_matches('/'))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            refresh_url,
            tokens: Arc::new(TokenStore::new(credentials)),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Shared token store, e.g. to persist rotated tokens.
    pub fn tokens(&self) -> Arc<TokenStore> {
        Arc::clone(&self.tokens)
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn send_get(&self, url: &Url) -> Result<(Response, Option<String>)> {
        let token = self.tokens.access();
        let mut request = self.client.get(url.clone());
        if let Some(ref token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        Ok((response, token))
    }

    /// GET `url`, refreshing the access token and replaying once on 401.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "GET");
        let (mut response, used_token) = self.send_get(&url).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!(url = %url, "Access token rejected, refreshing");
            self.refresh_access_token(used_token.as_deref()).await?;
            let (retry, _) = self.send_get(&url).await?;
            if retry.status() == StatusCode::UNAUTHORIZED {
                return Err(ApiError::Unauthorized {
                    url: url.to_string(),
                }
                .into());
            }
            response = retry;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        Ok(response.json().await?)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Concurrent callers serialize on a lock; a caller whose rejected token
    /// was already replaced by another refresh returns without refreshing again.
    async fn refresh_access_token(&self, rejected: Option<&str>) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;

        let current = self.tokens.access();
        if current.is_some() && current.as_deref() != rejected {
            debug!("Access token already refreshed by another request");
            return Ok(());
        }

        let Some(refresh) = self.tokens.refresh() else {
            return Err(ApiError::RefreshFailed("no refresh token available".into()).into());
        };

        let response = self
            .client
            .post(self.refresh_url.clone())
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RefreshFailed(format!("refresh endpoint returned {status}")).into());
        }

        let body: RefreshResponse = response.json().await.map_err(|e| ApiError::Decode {
            what: "token refresh response",
            reason: e.to_string(),
        })?;
        self.tokens.update(body.access, body.refresh);
        info!("Access token refreshed");
        Ok(())
    }

    async fn list<R: DeserializeOwned>(&self, path: &str, property: &PropertyId) -> Result<Vec<R>> {
        let url = self.endpoint(path, &[("property", property.as_str())])?;
        self.get_all(url).await
    }

    /// GET a collection, following paginated `next` links to the last page.
    async fn get_all<R: DeserializeOwned>(&self, first: Url) -> Result<Vec<R>> {
        let mut items = Vec::new();
        let mut url = first;
        let mut pages = 0u32;

        loop {
            let page: RawList<R> = self.get_json(url.clone()).await?;
            let (mut batch, next) = page.into_page();
            items.append(&mut batch);
            pages += 1;

            let Some(next) = next else { break };
            let next = url.join(&next)?;
            if next == url || pages >= MAX_PAGES {
                warn!(url = %next, pages, "Stopping pagination early");
                break;
            }
            url = next;
        }

        if pages > 1 {
            debug!(pages, count = items.len(), "Fetched paginated collection");
        }
        Ok(items)
    }
}

#[async_trait]
impl AvailabilitySource for ApiClient {
    async fn properties(&self) -> Result<Vec<Property>> {
        let url = self.endpoint("properties/", &[])?;
        let raw: Vec<RawProperty> = self.get_all(url).await?;
        let properties: Vec<Property> = raw.into_iter().map(Property::from).collect();
        debug!(count = properties.len(), "Fetched properties");
        Ok(properties)
    }

    async fn property(&self, id: &PropertyId) -> Result<Property> {
        let url = self.endpoint(&format!("properties/{id}/"), &[])?;
        let raw: RawProperty = self.get_json(url).await?;
        Ok(Property::from(raw))
    }

    async fn bookings(&self, property: &PropertyId) -> Result<Vec<BookingRecord>> {
        let raw: Vec<RawBooking> = self.list("bookings/", property).await?;
        Ok(normalize_for(raw, property))
    }

    async fn blocks(&self, property: &PropertyId) -> Result<Vec<BlockRecord>> {
        let raw: Vec<RawBlock> = self.list("blocks/", property).await?;
        Ok(normalize_for(raw, property))
    }

    async fn pricing_rules(&self, property: &PropertyId) -> Result<Vec<PricingRule>> {
        let raw: Vec<RawPricingRule> = self.list("pricing-rules/", property).await?;
        Ok(normalize_for(raw, property))
    }

    fn source_name(&self) -> &'static str {
        "api"
    }
}
