//! REST endpoint configuration.
//!
//! The base URL defaults to the same-origin `/api` prefix and can be replaced
//! at build time through `STOREFRONT_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// How long a toast stays on screen before it dismisses itself.
pub const DEFAULT_NOTIFICATION_SECS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base(option_env!("STOREFRONT_API_BASE_URL"))
    }
}

impl ApiConfig {
    /// Build config from an optional base URL, falling back to `/api`.
    pub fn from_base(raw: Option<&str>) -> Self {
        let base = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }

    /// `GET` endpoint returning every brand.
    pub fn brands_url(&self) -> String {
        format!("{}/brands", self.base_url)
    }

    /// `PUT` endpoint updating a user's profile fields.
    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}", self.base_url)
    }

    /// `PUT` endpoint changing a user's password.
    pub fn user_password_url(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}/password", self.base_url)
    }
}
