//! Signup Delivery
//!
//! Browser-side sinks for accepted emails.

use std::sync::Arc;

use careconnect_core::{SignupRequest, SignupSink, SiteConfig};

/// Logs accepted emails to the browser console
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl SignupSink for ConsoleSink {
    fn accept(&self, email: &str) {
        web_sys::console::log_1(&format!("Email submitted: {email}").into());
    }
}

/// Posts accepted emails to a backend without waiting for the answer
#[derive(Clone, Debug)]
pub struct HttpSink {
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl SignupSink for HttpSink {
    fn accept(&self, email: &str) {
        let url = resolve_endpoint(&self.endpoint, &origin());
        let body = SignupRequest::new(email);

        leptos::task::spawn_local(async move {
            if let Err(e) = post_signup(&url, &body).await {
                web_sys::console::warn_1(&format!("Signup delivery failed: {e}").into());
            }
        });
    }
}

/// Delivery chosen for this build
#[derive(Clone, Debug)]
pub enum Delivery {
    Console(ConsoleSink),
    Http(HttpSink),
}

impl Delivery {
    pub fn into_sink(self) -> Arc<dyn SignupSink> {
        match self {
            Self::Console(sink) => Arc::new(sink),
            Self::Http(sink) => Arc::new(sink),
        }
    }
}

/// Posts when an endpoint is configured, logs to the console otherwise
pub fn sink_for(config: &SiteConfig) -> Delivery {
    match config.signup_endpoint.as_deref() {
        Some(endpoint) => Delivery::Http(HttpSink::new(endpoint)),
        None => Delivery::Console(ConsoleSink),
    }
}

/// Send a signup to the backend
async fn post_signup(url: &str, body: &SignupRequest) -> Result<(), String> {
    let client = reqwest::Client::new();

    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        Ok(())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"].as_str().unwrap_or("Request failed").to_string())
    }
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Root-relative endpoints are joined onto the page origin
fn resolve_endpoint(endpoint: &str, origin: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), endpoint)
    } else {
        endpoint.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_logs_to_console() {
        assert!(matches!(sink_for(&SiteConfig::default()), Delivery::Console(_)));
    }

    #[test]
    fn test_endpoint_selects_http_sink() {
        let config = SiteConfig {
            signup_endpoint: Some("/api/signup".into()),
            ..SiteConfig::default()
        };

        match sink_for(&config) {
            Delivery::Http(sink) => assert_eq!(sink.endpoint, "/api/signup"),
            other => panic!("expected http delivery, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_relative_endpoint() {
        assert_eq!(
            resolve_endpoint("/api/signup", "https://careconnect.app/"),
            "https://careconnect.app/api/signup"
        );
    }

    #[test]
    fn test_resolve_absolute_endpoint() {
        assert_eq!(
            resolve_endpoint("https://api.example.com/signup", "http://localhost:3000"),
            "https://api.example.com/signup"
        );
    }
}
