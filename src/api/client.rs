use crate::core::error::ClientError;
use crate::models::user::{NewUser, User, UserId};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, warn};

/// Collection operations of the remote user service
pub trait UserService: Send + Sync {
    /// GET /users, in server order
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ClientError>> + Send;

    /// POST /users
    fn create_user(&self, user: &NewUser) -> impl Future<Output = Result<User, ClientError>> + Send;

    /// PUT /users/{id}
    fn replace_user(
        &self,
        id: &UserId,
        user: &User,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;

    /// DELETE /users/{id}
    fn delete_user(&self, id: &UserId) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// HTTP client for the remote user service
pub struct UserServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl UserServiceClient {
    /// Requests carry no timeout: every call is awaited to completion.
    pub fn new(base_url: String) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self::with_http_client(base_url, client))
    }

    pub fn with_http_client(base_url: String, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: &UserId) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(&id.to_string()))
    }

    fn check_status(response: Response, operation: &'static str) -> Result<Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            warn!(operation, status = %status, "Remote user service returned error status");
            return Err(ClientError::Status(status));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, operation: &'static str) -> Result<T, ClientError> {
        response.json::<T>().await.map_err(|e| {
            warn!(operation, error = %e, "Failed to decode remote user service response");
            ClientError::Decode(e.to_string())
        })
    }
}

impl UserService for UserServiceClient {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let url = self.users_url();
        debug!(url = %url, "Listing users");

        let response = self.client.get(&url).send().await.inspect_err(|e| {
            warn!(error = %e, "Failed to send list request");
        })?;
        let response = Self::check_status(response, "list")?;
        Self::decode(response, "list").await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        let url = self.users_url();
        debug!(url = %url, client_id = %user.id, "Creating user");

        let response = self.client.post(&url).json(user).send().await.inspect_err(|e| {
            warn!(error = %e, "Failed to send create request");
        })?;
        let response = Self::check_status(response, "create")?;
        Self::decode(response, "create").await
    }

    async fn replace_user(&self, id: &UserId, user: &User) -> Result<User, ClientError> {
        let url = self.user_url(id);
        debug!(url = %url, user_id = %id, "Replacing user");

        let response = self.client.put(&url).json(user).send().await.inspect_err(|e| {
            warn!(error = %e, user_id = %id, "Failed to send replace request");
        })?;
        let response = Self::check_status(response, "replace")?;
        Self::decode(response, "replace").await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ClientError> {
        let url = self.user_url(id);
        debug!(url = %url, user_id = %id, "Deleting user");

        let response = self.client.delete(&url).send().await.inspect_err(|e| {
            warn!(error = %e, user_id = %id, "Failed to send delete request");
        })?;
        Self::check_status(response, "delete")?;
        Ok(())
    }
}
