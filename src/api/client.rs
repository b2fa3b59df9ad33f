// Copyright (c) 2026 Uplink Contributors.
// Licensed under the MIT license.

//! Request client implementation

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use url::Url;

use super::response::{ApiBody, ApiResponse, CallFailure};
use super::{messages, DEFAULT_USER_AGENT};
use crate::error::{Error, Result};
use crate::ui::{ErrorLink, Lockscreen, Notify, NotifyOptions};

/// Request client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Stem prepended to every request path
    pub base_path: String,
    /// Path of the dashboard link offered on error lockscreens
    pub dashboard_path: String,
    /// Transport-level request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: "http://localhost".to_string(),
            dashboard_path: "/dashboard".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Client-side request wrapper
///
/// Issues GET/POST calls against `base_path` and routes every completed
/// exchange through one decision procedure that drives the injected
/// [`Lockscreen`] and [`Notify`] collaborators. Callers observe the outcome
/// through a success or error callback; exactly one of the two fires per
/// call.
#[derive(Clone)]
pub struct RequestClient {
    client: Client,
    config: ClientConfig,
    /// Stem prepended to request paths; behind a lock so a shared client
    /// can be re-pointed from `&self`
    base_path: Arc<RwLock<String>>,
    lockscreen: Arc<dyn Lockscreen>,
    notify: Arc<dyn Notify>,
}

impl RequestClient {
    /// Create a client with default configuration and the given base path
    pub fn new(
        base_path: impl Into<String>,
        lockscreen: Arc<dyn Lockscreen>,
        notify: Arc<dyn Notify>,
    ) -> Result<Self> {
        Self::with_config(
            ClientConfig {
                base_path: base_path.into(),
                ..ClientConfig::default()
            },
            lockscreen,
            notify,
        )
    }

    /// Create a client with custom configuration
    pub fn with_config(
        config: ClientConfig,
        lockscreen: Arc<dyn Lockscreen>,
        notify: Arc<dyn Notify>,
    ) -> Result<Self> {
        Url::parse(&config.base_path).map_err(|e| {
            Error::config(format!("invalid base path '{}': {}", config.base_path, e))
        })?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_path: Arc::new(RwLock::new(config.base_path.clone())),
            config,
            lockscreen,
            notify,
        })
    }

    /// Get the current base path
    pub fn base_path(&self) -> String {
        self.base_path.read().clone()
    }

    /// Re-point the client at a different base path
    pub fn set_base_path(&self, base_path: impl Into<String>) {
        *self.base_path.write() = base_path.into();
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a form-encoded POST to `base_path + path`
    ///
    /// Exactly one of `on_success`/`on_error` fires once the call resolves.
    /// Callers that do not care about an outcome pass an empty closure.
    pub async fn post<F, S, E>(&self, path: &str, form: &F, on_success: S, on_error: E)
    where
        F: Serialize + ?Sized,
        S: FnOnce(Option<ApiBody>, &ApiResponse),
        E: FnOnce(CallFailure),
    {
        let url = self.url_for(path);
        tracing::debug!(method = %Method::POST, url = %url, "dispatching request");

        let result = self
            .client
            .post(&url)
            .form(form)
            .header(ACCEPT, "application/json")
            .send()
            .await;

        match result {
            Err(err) => self.handle_network_error(err.into(), on_error),
            Ok(res) => match Self::read_response(res, Method::POST).await {
                Err(err) => self.handle_network_error(err, on_error),
                Ok(response) => self.handle_response(response, on_success, on_error),
            },
        }
    }

    /// Issue a GET to `base_path + path`
    ///
    /// Exactly one of `on_success`/`on_error` fires once the call resolves.
    pub async fn get<S, E>(&self, path: &str, on_success: S, on_error: E)
    where
        S: FnOnce(Option<ApiBody>, &ApiResponse),
        E: FnOnce(CallFailure),
    {
        let url = self.url_for(path);
        tracing::debug!(method = %Method::GET, url = %url, "dispatching request");

        match self.client.get(&url).send().await {
            Err(err) => self.handle_network_error(err.into(), on_error),
            Ok(res) => match Self::read_response(res, Method::GET).await {
                Err(err) => self.handle_network_error(err, on_error),
                Ok(response) => self.handle_response(response, on_success, on_error),
            },
        }
    }

    /// Central decision procedure over one completed exchange
    pub fn handle_response<S, E>(&self, response: ApiResponse, on_success: S, on_error: E)
    where
        S: FnOnce(Option<ApiBody>, &ApiResponse),
        E: FnOnce(CallFailure),
    {
        let status = response.status_code();
        tracing::debug!(url = %response.url, status, "handling response");

        // Resource and auth errors get the full error lockscreen.
        if response.status == StatusCode::NOT_FOUND
            || response.status == StatusCode::UNAUTHORIZED
        {
            let message = if response.status == StatusCode::NOT_FOUND {
                messages::NOT_FOUND
            } else {
                messages::UNAUTHORIZED
            };
            let links = [ErrorLink::new(
                self.dashboard_url(),
                messages::DASHBOARD_LINK_TEXT,
            )];
            tracing::warn!(url = %response.url, status, "showing error lockscreen");
            self.lockscreen.show_error(message, &links, status);
            self.lockscreen.hide_loading();
            on_error(CallFailure::Response(response));
            return;
        }

        // Completed transaction, non-2xx status: surface the offline banner.
        if !response.ok() && response.ready {
            self.lockscreen.show_offline();
        }

        let body = response.json_body();
        let mut lock_user_out = !response.ok();
        // POST responses must carry a passing application-level code.
        if !lock_user_out && response.is_post() {
            lock_user_out = body.as_ref().map_or(true, ApiBody::code_locks_out);
        }

        let options = NotifyOptions::for_lockout(lock_user_out);
        if lock_user_out {
            tracing::warn!(url = %response.url, status, "locking user out");
            self.lockscreen.set_lock();
        }

        if let Some(ref body) = body {
            for (title, text) in body.message_pairs() {
                self.notify.show(title, &text, &options);
            }
        }

        if lock_user_out {
            on_error(CallFailure::Response(response));
        } else {
            on_success(body, &response);
        }
    }

    /// Transport-level failure path: no response was received
    pub fn handle_network_error<E>(&self, err: Error, on_error: E)
    where
        E: FnOnce(CallFailure),
    {
        tracing::warn!(error = %err, "transport failure, showing offline state");
        self.lockscreen.show_offline();
        on_error(CallFailure::Transport(err));
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_path.read(), path)
    }

    fn dashboard_url(&self) -> String {
        format!("{}{}", self.base_path.read(), self.config.dashboard_path)
    }

    async fn read_response(res: reqwest::Response, method: Method) -> Result<ApiResponse> {
        let status = res.status();
        let headers = res.headers().clone();
        let url = res.url().clone();
        let body = res.bytes().await?;
        Ok(ApiResponse::new(status, headers, body, url, method))
    }
}
