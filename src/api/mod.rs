//! Client side of the remote users API.
//!
//! [`UsersApi`] is the seam the coordinators talk to; [`HttpUsersApi`] is the
//! REST implementation used by the binary. Every call returns the response
//! status alongside the decoded body, since coordinators only treat `200`
//! as success.

mod error;
mod http;

use async_trait::async_trait;

use crate::model::{User, UserFields, UserId};

pub use error::ApiError;
pub use http::HttpUsersApi;

/// Status and decoded body of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// True only for `200`; other 2xx codes are not treated as success.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// The four operations of the remote users collaborator.
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list(&self) -> Result<ApiResponse<Vec<User>>, ApiError>;

    /// Returns the created record when the server echoes it back.
    async fn create(&self, fields: &UserFields) -> Result<ApiResponse<Option<User>>, ApiError>;

    async fn update(&self, id: &UserId, fields: &UserFields) -> Result<ApiResponse<()>, ApiError>;

    async fn delete(&self, id: &UserId) -> Result<ApiResponse<()>, ApiError>;
}
