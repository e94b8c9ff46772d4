// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP gateway implementation using reqwest.
//!
//! Routes:
//!
//! ```text
//! GET    /lists                 list_all
//! POST   /lists                 create_list     {name}
//! GET    /lists/{id}            read_list
//! PATCH  /lists/{id}            update_list     {name}
//! DELETE /lists/{id}            delete_list
//! POST   /lists/{id}/items      create_item     {title, description?, completed, order}
//! GET    /items/{id}            read_item
//! PATCH  /items/{id}            update_item     partial fields
//! DELETE /items/{id}            delete_item
//! PUT    /items/{id}/order      update_order    {position}
//! ```

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use tl_core::{Item, ItemId, ItemPatch, ListId, NewItem, TodoList};

use super::gateway::{Gateway, GatewayFuture, TransportError, TransportResult};

/// Longest server error message carried into a [`TransportError`].
const MAX_ERROR_MESSAGE: usize = 200;

/// Connection settings for [`HttpGateway`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL every route is appended to.
    pub url: String,
    /// Bearer token sent with every request, if set.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            url: "http://localhost:3000/api".to_string(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PositionBody {
    position: u32,
}

/// Gateway speaking JSON over HTTP.
pub struct HttpGateway {
    client: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl HttpGateway {
    /// Create a gateway for the given settings.
    pub fn new(config: &GatewayConfig) -> TransportResult<Self> {
        let base = Url::parse(&config.url)
            .map_err(|e| TransportError::InvalidUrl(format!("'{}': {}", config.url, e)))?;
        if base.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(format!(
                "'{}': not a base URL",
                config.url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(HttpGateway {
            client,
            base,
            token: config.token.clone(),
        })
    }

    /// Build the URL for a route, percent-encoding each segment.
    pub(crate) fn url(&self, segments: &[&str]) -> TransportResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "remote request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, what: &str) -> TransportResult<reqwest::Response> {
        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body, what))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        what: &str,
    ) -> TransportResult<T> {
        let response = self.send(builder, what).await?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn send_empty(&self, builder: RequestBuilder, what: &str) -> TransportResult<()> {
        self.send(builder, what).await.map(|_| ())
    }
}

impl Gateway for HttpGateway {
    fn list_all(&self) -> GatewayFuture<'_, Vec<TodoList>> {
        Box::pin(async move {
            let url = self.url(&["lists"])?;
            self.send_json(self.request(Method::GET, url), "lists").await
        })
    }

    fn create_list<'a>(&'a self, name: &'a str) -> GatewayFuture<'a, TodoList> {
        Box::pin(async move {
            let url = self.url(&["lists"])?;
            let builder = self.request(Method::POST, url).json(&NameBody { name });
            self.send_json(builder, "lists").await
        })
    }

    fn read_list<'a>(&'a self, id: &'a ListId) -> GatewayFuture<'a, TodoList> {
        Box::pin(async move {
            let url = self.url(&["lists", id.as_str()])?;
            let what = format!("list {}", id);
            self.send_json(self.request(Method::GET, url), &what).await
        })
    }

    fn update_list<'a>(&'a self, id: &'a ListId, name: &'a str) -> GatewayFuture<'a, TodoList> {
        Box::pin(async move {
            let url = self.url(&["lists", id.as_str()])?;
            let builder = self.request(Method::PATCH, url).json(&NameBody { name });
            self.send_json(builder, &format!("list {}", id)).await
        })
    }

    fn delete_list<'a>(&'a self, id: &'a ListId) -> GatewayFuture<'a, ()> {
        Box::pin(async move {
            let url = self.url(&["lists", id.as_str()])?;
            let what = format!("list {}", id);
            self.send_empty(self.request(Method::DELETE, url), &what)
                .await
        })
    }

    fn create_item<'a>(
        &'a self,
        list_id: &'a ListId,
        item: &'a NewItem,
    ) -> GatewayFuture<'a, Item> {
        Box::pin(async move {
            let url = self.url(&["lists", list_id.as_str(), "items"])?;
            let builder = self.request(Method::POST, url).json(item);
            self.send_json(builder, &format!("list {}", list_id)).await
        })
    }

    fn read_item<'a>(&'a self, id: &'a ItemId) -> GatewayFuture<'a, Item> {
        Box::pin(async move {
            let url = self.url(&["items", id.as_str()])?;
            let what = format!("item {}", id);
            self.send_json(self.request(Method::GET, url), &what).await
        })
    }

    fn update_item<'a>(&'a self, id: &'a ItemId, patch: &'a ItemPatch) -> GatewayFuture<'a, Item> {
        Box::pin(async move {
            let url = self.url(&["items", id.as_str()])?;
            let builder = self.request(Method::PATCH, url).json(patch);
            self.send_json(builder, &format!("item {}", id)).await
        })
    }

    fn delete_item<'a>(&'a self, id: &'a ItemId) -> GatewayFuture<'a, ()> {
        Box::pin(async move {
            let url = self.url(&["items", id.as_str()])?;
            let what = format!("item {}", id);
            self.send_empty(self.request(Method::DELETE, url), &what)
                .await
        })
    }

    fn update_order<'a>(&'a self, id: &'a ItemId, position: u32) -> GatewayFuture<'a, ()> {
        Box::pin(async move {
            let url = self.url(&["items", id.as_str(), "order"])?;
            let builder = self
                .request(Method::PUT, url)
                .json(&PositionBody { position });
            self.send_empty(builder, &format!("item {}", id)).await
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_decode() {
        TransportError::Decode(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}

/// Map a non-success status to a transport error.
///
/// `what` names the addressed entity for not-found errors.
pub(crate) fn status_error(status: StatusCode, body: &str, what: &str) -> TransportError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TransportError::Unauthorized,
        StatusCode::NOT_FOUND => TransportError::NotFound(what.to_string()),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            TransportError::Rejected(error_message(body, status))
        }
        _ => TransportError::Status {
            status: status.as_u16(),
            message: error_message(body, status),
        },
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"error": "..."}`, `{"message": "..."}` or plain text.
fn error_message(body: &str, status: StatusCode) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(String::from))
        });
    let message = from_json.unwrap_or_else(|| body.trim().to_string());
    if message.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    message.chars().take(MAX_ERROR_MESSAGE).collect()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
