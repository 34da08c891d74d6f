use std::future::Future;

use serde_derive::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::{build_client, error::ServiceError, get_json};
use crate::config::UserDirectoryConfig;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Address {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    pub name: String,
}

/// Read-only client of a JSON user directory.
#[derive(Clone)]
pub struct UserDirectory {
    client: reqwest::Client,
    url: String,
}

impl UserDirectory {
    pub fn new(config: &UserDirectoryConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(config.timeout_millis)?,
            url: config.url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(Url::parse(&format!("{}/{}", self.url, path))?)
    }

    /// First `limit` users of the directory.
    pub fn list(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<User>, ServiceError>> + Send + 'static {
        debug!(limit, "listing users");
        let users = get_json::<Vec<User>>(self.client.clone(), self.endpoint("users"));
        async move {
            let mut users = users.await?;
            users.truncate(limit);
            Ok::<_, ServiceError>(users)
        }
    }

    pub fn get(&self, id: u64) -> impl Future<Output = Result<User, ServiceError>> + Send + 'static {
        debug!(user_id = id, "fetching user");
        get_json(self.client.clone(), self.endpoint(&format!("users/{}", id)))
    }
}


#[cfg(test)]
mod tests {
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    use super::testdata::user;
    use super::*;

    fn directory(server: &MockServer) -> UserDirectory {
        UserDirectory::new(&UserDirectoryConfig {
            url: server.base_url() + "/",
            timeout_millis: 2000,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_truncates() {
        // GIVEN
        let server = MockServer::start();
        let body = json!([user(1, "Leanne"), user(2, "Ervin"), user(3, "Clementine")]);
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("content-type", "application/json")
                .body(body.to_string());
        });

        // WHEN
        let users = directory(&server).list(2).await.unwrap();

        // THEN
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Leanne");
        assert_eq!(users[1].address.city, "Gwenborough");
    }

    #[tokio::test]
    async fn test_get() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/2");
            then.status(200).body(user(2, "Ervin").to_string());
        });

        let found = directory(&server).get(2).await.unwrap();

        assert_eq!(found.id, 2);
        assert_eq!(found.company.name, "Romaguera-Crona");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/99");
            then.status(404).body("{}");
        });

        let err = directory(&server).get(99).await.unwrap_err();

        assert_eq!(err, ServiceError::Status(404));
    }

    #[tokio::test]
    async fn test_unreachable_directory() {
        let directory = UserDirectory::new(&UserDirectoryConfig {
            url: "http://127.0.0.1:1".to_string(),
            timeout_millis: 2000,
        })
        .unwrap();

        let err = directory.list(3).await.unwrap_err();

        assert!(matches!(err, ServiceError::Http(_)), "got {:?}", err);
    }
}
