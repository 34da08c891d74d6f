pub mod error;
pub mod users;
pub mod weather;

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

pub use error::ServiceError;
pub use users::{User, UserDirectory};
pub use weather::{Weather, WeatherService};

fn build_client(timeout_millis: u64) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(timeout_millis))
        .build()
        .map_err(ServiceError::from)
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ServiceError::Decode(err.to_string()))
}

/// GETs `url` and decodes a JSON body; any non-success status is an error.
async fn get_json<T: DeserializeOwned>(
    client: reqwest::Client,
    url: Result<Url, ServiceError>,
) -> Result<T, ServiceError> {
    let response = client.get(url?).send().await?;
    if !response.status().is_success() {
        return Err(ServiceError::Status(response.status().as_u16()));
    }
    decode(response).await
}
