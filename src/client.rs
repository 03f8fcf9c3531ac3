use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::error::{Result, UserError};
use crate::responses::UsersResponse;
use crate::types::{NewUser, User};

const USERS_PATH: &str = "/api/users";

/// Thin wrapper over the users REST API.
///
/// Every call is a single request with the client-wide timeout. Nothing is
/// retried and nothing is cached.
#[derive(Clone, Debug)]
pub struct UserClient {
    http: Client,
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /`, expecting 200.
    pub async fn check_health(&self) -> Result<()> {
        let url = format!("{}/", self.base_url);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        expect_status(response, StatusCode::OK)?;
        Ok(())
    }

    /// `GET /api/users`, expecting 200.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}{USERS_PATH}", self.base_url);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        let body: UsersResponse = expect_status(response, StatusCode::OK)?.json().await?;
        debug!(count = body.users.len(), "received users");
        Ok(body.users)
    }

    /// `POST /api/users`, expecting 201.
    pub async fn create_user(&self, user: &NewUser) -> Result<()> {
        let url = format!("{}{USERS_PATH}", self.base_url);
        debug!(%url, name = %user.name, "POST");
        let response = self.http.post(&url).json(user).send().await?;
        expect_status(response, StatusCode::CREATED)?;
        Ok(())
    }

    /// `DELETE /api/users/{id}`, expecting 200.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        let url = format!("{}{USERS_PATH}/{id}", self.base_url);
        debug!(%url, "DELETE");
        let response = self.http.delete(&url).send().await?;
        expect_status(response, StatusCode::OK)?;
        Ok(())
    }
}

/// Anything but the operation's success status is a server error; 204 on a
/// delete is not treated as 200.
fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    debug!(status = status.as_u16(), url = %response.url(), "response");
    if status != expected {
        return Err(UserError::Server {
            status: status.as_u16(),
        });
    }
    Ok(response)
}
