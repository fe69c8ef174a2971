//! HTTP client for the Informatica Product 360 login and search endpoints.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;
use serde_json::Value;

use super::source::{ApiError, CatalogSource, Credentials, Session};
use super::types::{LoginRequest, LoginResponse, SearchRequest, SESSION_HEADER};
use crate::config::ResolvedConfig;

pub struct P360Client {
    http: reqwest::Client,
    login_url: String,
    search_url: String,
    user_agent: String,
    page_size: u32,
    records_to_return: u32,
}

impl P360Client {
    pub fn new(login_url: impl Into<String>, search_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            login_url: login_url.into(),
            search_url: search_url.into(),
            user_agent: crate::config::DEFAULT_USER_AGENT.to_string(),
            page_size: crate::config::DEFAULT_API_PAGE_SIZE,
            records_to_return: crate::config::DEFAULT_RECORDS_TO_RETURN,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            page_size: config.api_page_size,
            records_to_return: config.records_to_return,
            ..Self::new(config.login_url.clone(), config.search_url.clone())
        }
    }
}

#[async_trait]
impl CatalogSource for P360Client {
    fn name(&self) -> &str {
        "p360"
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(ApiError::Auth("username and password are required".to_string()));
        }

        info!("Authenticating {} at {}", credentials.username, self.login_url);
        let response = self
            .http
            .post(&self.login_url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .json(&LoginRequest {
                username: &credentials.username,
                password: &credentials.password,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            warn!("Login rejected with HTTP {}", status.as_u16());
            return Err(ApiError::Auth(body));
        }

        let login: LoginResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(Session {
            token: login.user_info.session_id,
            username: credentials.username.clone(),
            org_name: login.user_info.org_name,
        })
    }

    async fn fetch(&self, session: &Session) -> Result<Value, ApiError> {
        let request = SearchRequest::priced_items(self.page_size, self.records_to_return);
        debug!("Search request: {:?}", request);

        let response = self
            .http
            .post(&self.search_url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(SESSION_HEADER, &session.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Search response is not JSON: {}", e);
            ApiError::Parse(format!("{}: {}", e, truncate(&body, 200)))
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ação", 2), "aç...");
        assert_eq!(truncate("ok", 10), "ok");
    }
}
