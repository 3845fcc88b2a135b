use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::model::{User, UserFields, UserId};

use super::{ApiError, ApiResponse, UsersApi};

/// REST implementation of [`UsersApi`] rooted at `{base_url}/users`.
///
/// Only a connect timeout is configured: a request that connects but never
/// answers keeps its caller waiting.
#[derive(Clone)]
pub struct HttpUsersApi {
    client: Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn item_url(&self, id: &UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Sends the request and splits the outcome into status and raw body.
    /// Non-2xx statuses become [`ApiError::Response`] with the body kept.
    async fn send(&self, request: RequestBuilder) -> Result<(u16, Vec<u8>), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(status = status.as_u16(), bytes = body.len(), "users api response");

        if !status.is_success() {
            return Err(ApiError::Response {
                status: status.as_u16(),
                data: error_payload(&body),
            });
        }

        Ok((status.as_u16(), body))
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list(&self) -> Result<ApiResponse<Vec<User>>, ApiError> {
        info!(url = %self.collection_url(), "listing users");
        let (status, body) = self.send(self.client.get(self.collection_url())).await?;
        let users = serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse::new(status, users))
    }

    async fn create(&self, fields: &UserFields) -> Result<ApiResponse<Option<User>>, ApiError> {
        info!(url = %self.collection_url(), name = %fields.name, "creating user");
        let (status, body) = self
            .send(self.client.post(self.collection_url()).json(fields))
            .await?;
        // Servers differ on whether POST echoes the record.
        let created = serde_json::from_slice::<User>(&body).ok();
        Ok(ApiResponse::new(status, created))
    }

    async fn update(&self, id: &UserId, fields: &UserFields) -> Result<ApiResponse<()>, ApiError> {
        info!(url = %self.item_url(id), "updating user");
        let (status, _) = self.send(self.client.put(self.item_url(id)).json(fields)).await?;
        Ok(ApiResponse::new(status, ()))
    }

    async fn delete(&self, id: &UserId) -> Result<ApiResponse<()>, ApiError> {
        info!(url = %self.item_url(id), "deleting user");
        let (status, _) = self.send(self.client.delete(self.item_url(id))).await?;
        Ok(ApiResponse::new(status, ()))
    }
}

fn error_payload(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api(base_url: &str) -> HttpUsersApi {
        HttpUsersApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            connect_timeout_seconds: 1,
        })
        .expect("client")
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let api = api("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.collection_url(), "http://localhost:5000/users");
        assert_eq!(
            api.item_url(&UserId::from(4)),
            "http://localhost:5000/users/4"
        );
    }

    #[test]
    fn error_payload_prefers_json() {
        assert_eq!(error_payload(br#"{"error":"nope"}"#), json!({"error": "nope"}));
        assert_eq!(error_payload(b"Not Found"), json!("Not Found"));
        assert_eq!(error_payload(b""), Value::Null);
    }
}
