//! REST API client for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures come back as `ApiError`. A `FAIL` status is a
//! successfully decoded envelope, not an error, so screens can show the
//! server's message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use super::types::BrandList;
use super::types::{ApiEnvelope, Brand, PasswordChange, UpdatePayload, UserInfo};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Remote operations the storefront screens depend on.
///
/// Futures are `?Send` because browser fetches are bound to the UI thread.
#[async_trait::async_trait(?Send)]
pub trait StoreApi {
    /// Fetch the complete brand catalog (no pagination).
    async fn get_all_brands(&self) -> Result<Vec<Brand>, ApiError>;

    /// Update profile fields of `user_id`; the envelope echoes the stored record.
    async fn update_user(&self, user_id: &str, payload: &UpdatePayload) -> Result<ApiEnvelope<UserInfo>, ApiError>;

    /// Change the password of `user_id`.
    async fn update_password(
        &self,
        user_id: &str,
        change: &PasswordChange,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError>;
}

/// `StoreApi` backed by browser `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpStoreApi {
    #[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
    config: ApiConfig,
}

impl HttpStoreApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[cfg(test)]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Decode the all-brands body. Any non-2xx status is an error.
#[cfg(any(test, feature = "hydrate"))]
fn parse_brand_list(ok: bool, status: u16, body: &str) -> Result<Vec<Brand>, ApiError> {
    if !ok {
        return Err(ApiError::Status(status));
    }
    let list: BrandList = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(list.data)
}

/// Decode an update envelope.
///
/// The backend reports application failures with a 4xx status and a `FAIL`
/// envelope, so the body is tried first whatever the status was.
#[cfg(any(test, feature = "hydrate"))]
fn parse_envelope<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<(bool, u16, String), ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok((ok, status, body))
}

#[async_trait::async_trait(?Send)]
impl StoreApi for HttpStoreApi {
    async fn get_all_brands(&self) -> Result<Vec<Brand>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.brands_url())
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let (ok, status, body) = read_body(resp).await?;
            parse_brand_list(ok, status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn update_user(&self, user_id: &str, payload: &UpdatePayload) -> Result<ApiEnvelope<UserInfo>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.config.user_url(user_id))
                .json(payload)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let (ok, status, body) = read_body(resp).await?;
            parse_envelope(ok, status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn update_password(
        &self,
        user_id: &str,
        change: &PasswordChange,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.config.user_password_url(user_id))
                .json(change)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let (ok, status, body) = read_body(resp).await?;
            parse_envelope(ok, status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, change);
            Err(ApiError::Unavailable)
        }
    }
}
